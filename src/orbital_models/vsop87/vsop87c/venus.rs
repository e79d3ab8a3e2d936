//! VSOP87C series for Venus: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [0.72268045621, 3.17614669179, 10213.5293636945],
    [0.00733886107, 5.43699242686, 0.2438174835],
    [0.00244692613, 4.05605630888, 20426.8149099055],
    [0.00063317702, 0.49335411201, 10213.0417287275],
    [0.00002795043, 0.33061720033, 2353.1099712553],
    [0.00001941766, 4.2335653145, 1577.0997249643],
    [0.00001242687, 4.9361358961, 30640.1004561165],
    [0.00001163369, 2.88004293502, 18073.9487561337],
    [0.0000104428, 1.75322105845, 6283.3196674749],
    [0.0000076742, 0.59253172189, 529.9347825781],
    [0.00000669994, 1.45757409332, 14143.7390599141],
    [0.00000657435, 0.50103996032, 8636.18582124671],
    [0.00000476814, 5.8434943231, 10187.2310438947],
    [0.00000475078, 3.65048802648, 10239.8276834943],
    [0.00000559353, 1.16579177696, 22004.1584523533],
    [0.00000544577, 2.71804028246, 11790.8729061423],
    [0.0000040802, 3.92608771235, 775.7664288075],
    [0.00000281345, 2.80298571306, 9683.8383985999],
    [0.00000270035, 3.67770752796, 9438.0067523705],
    [0.0000026886, 0.41990030277, 10743.2203287891],
    [0.0000029998, 5.65601998711, 5507.3094211839],
    [0.00000214307, 0.74923674788, 10022.0810975829],
    [0.00000241347, 5.80682329886, 10989.0519750185],
    [0.00000208372, 2.46285909236, 10404.9776298061],
    [0.00000271224, 2.62417096158, 19897.1239448109],
    [0.00000264276, 5.12064283406, 9153.6597985383],
    [0.00000214535, 1.37526779747, 20426.32727493849],
    [0.00000175488, 6.12331394777, 191.2044486281],
    [0.00000123055, 1.58857792634, 1059.6257476727],
    [0.0000015423, 5.35560161427, 4705.9761250271],
    [0.00000147037, 5.55854050911, 19651.2922985815],
    [0.00000100153, 0.79332045392, 9437.5191174035],
    [0.00000069555, 0.09311754829, 9104.1508116011],
    [0.00000060317, 3.11675324526, 11322.9079157879],
    [0.00000081789, 4.14338512686, 15721.0826023619],
    [0.00000058874, 3.05764615349, 20618.2631760171],
    [0.00000060776, 3.78470873239, 4552.1973145423],
    [0.00000046411, 0.52070218977, 10192.7539682021],
    [0.00000046285, 2.68960619882, 10234.3047591869],
    [0.00000062288, 2.59109725374, 25934.3681485729],
    [0.00000050365, 4.75194275844, 8623.96883344369],
    [0.00000057275, 0.64239189151, 3154.4432674121],
    [0.00000044993, 1.6320820933, 19367.4329797163],
    [0.00000040167, 3.21167128301, 9411.7084325707],
    [0.00000047716, 0.86304453306, 213.5429129215],
    [0.00000039763, 1.64025153322, 801.5771136403],
    [0.00000036106, 0.00294457034, 11015.3502948183],
    [0.0000004515, 2.05121968981, 29580.7185259273],
    [0.00000036973, 4.39488677348, 7058.8422787989],
    [0.00000044928, 2.21932487684, 13367.7288136231],
    [0.00000027822, 1.80340755563, 1109.1347346099],
    [0.00000031714, 5.71016699928, 15874.8614128467],
    [0.00000036279, 3.91641576039, 10000.23026825651],
    [0.0000003536, 5.58217966591, 10426.8284591325],
    [0.0000002553, 5.55124903584, 7860.6632099227],
    [0.00000024951, 5.10701160912, 13368.2164485901],
    [0.00000020285, 2.70230185537, 10220.6429106953],
    [0.00000020275, 0.50470014586, 10206.4158166937],
    [0.00000021291, 2.94920881997, 3128.6325825793],
    [0.00000019173, 2.04473251084, 7.3573644843],
    [0.00000018901, 5.32807743689, 26.0545023163],
    [0.00000021874, 3.64157746468, 17297.9385098427],
    [0.00000019888, 2.97802303514, 3930.4535137031],
    [0.00000015237, 4.38451579542, 9830.6328314713],
    [0.00000017432, 0.19412655939, 3531.81687532789],
    [0.00000014522, 5.10931707627, 10596.4258959177],
    [0.00000016153, 2.06702370588, 7084.6529636317],
    [0.00000016091, 2.35723470212, 20213.5158144675],
    [0.00000014842, 4.06993785667, 29864.5778447925],
    [0.00000011112, 3.77156689319, 28287.2343023447],
    [0.00000012828, 2.04993681745, 1589.3167127673],
    [0.00000011212, 2.47660347576, 9154.1474335053],
    [0.00000014376, 3.86295510498, 23581.5019948011],
    [0.00000012175, 4.86624913254, 21228.63584102931],
    [0.00000009393, 0.62322150367, 11272.91129388371],
    [0.00000012824, 1.41267695017, 18837.25437965469],
    [0.00000009207, 0.63567894131, 5661.5758666357],
    [0.00000008622, 4.96988848671, 21536.1934619989],
    [0.00000011653, 6.2017622318, 3340.8562441833],
    [0.00000011496, 5.06383150221, 21228.1482060623],
    [0.00000009511, 0.26562072904, 17298.4261448097],
    [0.00000011281, 4.58316811302, 9786.44353785149],
    [0.00000008498, 3.85640563749, 1577.5873599313],
    [0.00000010763, 1.23302415918, 9929.6700448293],
    [0.00000008847, 1.67978485166, 29051.0275608327],
    [0.00000010378, 1.97768679369, 10497.38868255971],
    [0.00000007498, 5.81617198925, 40853.3860023275],
    [0.00000007375, 0.80020428978, 16496.6052136859],
    [0.00000008792, 0.46879154707, 10208.0064393871],
    [0.00000008786, 2.74189610123, 10219.0522880019],
    [0.00000007423, 4.16147581059, 10175.5016910587],
    [0.00000007386, 5.33241732891, 10251.55703633031],
    [0.00000006692, 4.38326911706, 8094.2778683491],
    [0.00000006531, 1.17040611406, 20419.7013629047],
    [0.00000005876, 2.02888635328, 32217.4439985643],
    [0.00000007945, 3.46479056876, 12566.3955174663],
    [0.00000005723, 2.30960586444, 24357.0246061251],
    [0.0000000596, 0.33603622534, 6681.46867088311],
    [0.00000005974, 2.16510174683, 426.8420083595],
    [0.00000005761, 0.76064746748, 2352.6223362883],
    [0.00000007279, 3.4986872964, 11014.8626598513],
    [0.00000004942, 3.65960075191, 3149.4079780717],
    [0.00000005638, 2.37982075471, 382.6527147397],
    [0.00000006069, 2.45567436191, 9683.35076363289],
    [0.00000004581, 2.63348121114, 14765.48286075331],
    [0.00000006372, 0.20312515446, 25158.3579022819],
    [0.00000004902, 1.17139302409, 18837.7420146217],
    [0.00000004698, 0.27470947352, 18849.4713674577],
    [0.00000005371, 4.44585316652, 26088.1469590577],
    [0.00000005495, 3.29251136036, 17086.2024832057],
    [0.00000005381, 5.4109635638, 33794.7875410121],
    [0.0000000487, 2.78487952662, 20453.1132297053],
    [0.00000003922, 2.87932422455, 13745.5900565059],
    [0.00000004608, 4.34320749688, 5661.0882316687],
    [0.0000000397, 3.08739367796, 4731.7868098599],
    [0.00000003556, 0.34805582338, 1551.2890401315],
    [0.00000004329, 3.40536513934, 23958.8756027169],
    [0.00000003274, 3.43453378712, 529.44714761109],
    [0.00000003328, 1.0477614769, 18307.56341456009],
    [0.00000002787, 2.05633948048, 11790.3852711753],
    [0.00000003603, 4.92117852022, 14945.0723560709],
    [0.00000002949, 2.82363129219, 10198.2768925095],
    [0.00000002944, 0.38707318449, 10228.78183487951],
    [0.00000003221, 0.43638422425, 20400.5165901057],
    [0.00000003653, 1.62294150568, 29088.5675985015],
    [0.00000002683, 2.20899209567, 6282.83203250789],
    [0.00000002848, 0.52334662875, 11322.42028082089],
    [0.00000002745, 1.78121493204, 5481.4987363511],
    [0.00000002426, 2.8146631246, 6872.91693699471],
    [0.00000002262, 3.48344118262, 7860.17557495569],
    [0.00000002431, 3.85595069475, 30110.4094910219],
    [0.00000002218, 5.83392361752, 17277.6507493173],
    [0.00000002955, 5.30083680831, 27511.7116910207],
    [0.000000023, 3.8968785344, 3442.81876244891],
    [0.00000002424, 0.96902068311, 20956.5058750001],
    [0.00000002622, 3.7451489821, 9580.7456243813],
    [0.00000002032, 1.05319678961, 20000.2167190295],
    [0.00000002206, 3.60536125643, 537.0483295789],
    [0.0000000201, 0.56779046, 21202.3375212295],
    [0.00000002471, 5.74733670645, 10846.3131030077],
    [0.00000002315, 5.33473916529, 9573.14444241349],
    [0.00000002188, 5.98208918864, 9967.69771746511],
    [0.00000002278, 4.3918994269, 10110.4365894759],
    [0.00000002278, 5.10198662047, 10316.6221379131],
    [0.00000001808, 4.00370769986, 22779.6810636773],
    [0.00000002244, 2.44298085439, 5507.7970561509],
    [0.00000001796, 3.09913214862, 7063.87756813929],
    [0.00000002118, 3.51159951397, 10459.3610099239],
    [0.00000001908, 5.61152019917, 20809.7114421287],
    [0.00000002093, 0.69713061337, 522.8212355773],
    [0.00000001753, 0.39797312506, 13554.1417903943],
    [0.00000002072, 4.26049243578, 9690.9519456007],
    [0.00000001993, 3.55209979851, 10404.48999483909],
    [0.0000000216, 3.04497475534, 33018.7772947211],
    [0.00000001962, 5.2348823463, 10736.1067817883],
    [0.00000001484, 2.74179945598, 3723.26514143949],
    [0.00000001997, 0.06145988645, 18875.2820522905],
    [0.00000002057, 1.98619862343, 102.84895673509],
    [0.00000002016, 0.55406656183, 37724.9972372317],
    [0.00000001618, 4.87669871338, 7085.1405985987],
    [0.00000001659, 1.57309690432, 20235.36664379391],
    [0.00000001553, 1.42749385034, 14945.5599910379],
    [0.00000001873, 1.50254912801, 30213.5022652405],
    [0.00000001542, 4.02240332746, 6490.0204047715],
    [0.0000000136, 5.79998899684, 10233.1991245943],
    [0.0000000136, 3.69389705053, 10193.85960279471],
    [0.00000001592, 0.72118861666, 10138.7477651272],
    [0.00000001592, 2.48951212353, 10288.3109622618],
    [0.00000001368, 2.85917999065, 18875.76968725751],
    [0.00000001235, 3.79205714927, 20.5315780089],
    [0.00000001485, 4.99009504257, 9160.77334553909],
    [0.00000001516, 2.06896537087, 9146.54625153749],
    [0.00000001233, 0.18739466393, 18073.46112116669],
    [0.0000000156, 0.36404331783, 9897.1374940379],
    [0.0000000156, 2.84665742236, 10529.9212333511],
    [0.00000001179, 6.01432548499, 14919.2616712381],
    [0.00000001213, 1.30457787805, 28521.3365957381],
    [0.00000001182, 5.63437933479, 9794.0447198193],
    [0.00000001402, 4.53367387536, 8661.9965060795],
    [0.00000001158, 3.85902457723, 10633.0140075697],
    [0.00000001257, 4.23637984727, 2378.9206560881],
    [0.00000001089, 2.26544798668, 30639.61282114949],
    [0.00000001402, 5.00395460415, 10640.1275545705],
    [0.00000001483, 5.56946826365, 21535.70582703189],
    [0.00000001079, 4.38415798738, 775.2787938405],
    [0.0000000137, 4.61207624622, 9786.9311728185],
    [0.00000001064, 5.6016749704, 16984.2399649401],
    [0.00000001158, 4.33523311867, 3929.96587873609],
    [0.00000000967, 1.59661459457, 640.1411037975],
    [0.00000000995, 1.12539751877, 8662.48414104651],
    [0.00000001305, 4.46692235351, 36948.9869909407],
    [0.00000001191, 4.52742138803, 39264.3131070437],
    [0.0000000101, 1.09565332862, 10007.3438152573],
    [0.0000000101, 2.11504740292, 10419.7149121317],
    [0.0000000095, 4.369098726, 1109.6223695769],
    [0.00000001221, 5.50189153252, 75.0254160508],
    [0.00000000987, 5.46991186463, 13937.0383226175],
    [0.00000001164, 1.47388964891, 22805.4917485101],
    [0.00000000845, 4.27255310755, 6770.46678376209],
    [0.00000000996, 4.53838005508, 13341.9181287903],
    [0.00000001123, 1.83377276818, 246.0754637129],
    [0.00000001139, 2.43198497783, 2119.00767786191],
    [0.00000001046, 0.31602811545, 31441.92138724031],
    [0.00000000879, 3.8573546217, 15720.5949673949],
    [0.00000000761, 4.0186778478, 7564.58690325449],
    [0.00000000814, 6.07006670549, 9676.7248515991],
    [0.00000000786, 2.08315748724, 11764.5745863425],
    [0.00000000883, 0.01404050923, 25158.8455372489],
    [0.00000000795, 3.42432291896, 10750.33387578991],
    [0.0000000077, 0.68478801852, 7834.3648901229],
    [0.00000000825, 2.06778751923, 191.6920835951],
    [0.00000000696, 3.39721023806, 36147.6536947839],
    [0.00000000941, 3.992221188, 28520.84896077109],
    [0.00000000787, 5.89002484288, 19890.0103978101],
    [0.00000000788, 0.18085455233, 7994.77225950771],
    [0.00000000624, 2.84762425105, 39794.0040721383],
    [0.00000000609, 2.15716574588, 8624.45646841071],
    [0.00000000836, 1.97255748877, 41655.2069334513],
    [0.00000000744, 2.51526655235, 19904.2374918117],
    [0.00000000689, 4.60442929527, 1066.7392946735],
    [0.00000000803, 5.88878266978, 40879.1966871603],
    [0.00000000692, 0.54636447385, 6770.9544187291],
    [0.00000000585, 5.02593807559, 14143.2514249471],
    [0.00000000678, 5.96525738921, 12592.2062022991],
    [0.00000000573, 2.5229147626, 12592.6938372661],
    [0.0000000067, 0.92908106036, 10239.3400485273],
    [0.00000000655, 4.98008645111, 19366.94534474929],
    [0.00000000626, 1.17708461387, 52176.0501006319],
    [0.00000000548, 0.67624288629, 17777.87244946549],
    [0.00000000709, 2.90326183951, 26735.7014447297],
    [0.00000000531, 3.09187361677, 110.45013870291],
    [0.00000000605, 4.63445748441, 10059.7505532097],
    [0.00000000676, 5.20222552429, 20529.9076841241],
    [0.00000000598, 3.03085156721, 12432.2864678813],
    [0.00000000593, 4.85950569906, 10367.3081741793],
    [0.00000000663, 0.05389382712, 1162.7185218913],
    [0.00000000466, 5.52080701144, 8631.0823804445],
    [0.00000000468, 3.02762841033, 16983.75232997309],
    [0.00000000454, 0.79241866785, 10042.8564930753],
    [0.00000000462, 5.82955181248, 6.86972951729],
    [0.00000000444, 2.41828213333, 10384.2022343137],
    [0.0000000046, 0.69082886296, 11802.6022589783],
    [0.00000000436, 1.85693465963, 9639.18456535971],
    [0.00000000565, 5.70677906646, 8520.87605922509],
    [0.00000000416, 1.72605691131, 10225.2587165305],
    [0.00000000416, 1.48464382888, 10201.80001085851],
    [0.00000000414, 3.17556892991, 10186.7434089277],
    [0.00000000431, 1.73079752624, 8616.85528644289],
    [0.00000000393, 2.42848511919, 3532.3045102949],
    [0.00000000406, 1.35364773044, 10787.8741620293],
    [0.0000000038, 0.22739133734, 19317.43635781211],
    [0.00000000458, 1.71416676029, 2218.51328670329],
    [0.00000000433, 5.30346380915, 19650.8046636145],
    [0.00000000377, 5.67314793766, 149.8070146181],
    [0.0000000039, 0.06912441711, 13936.5506876505],
    [0.0000000036, 5.95509031178, 24150.3238688285],
    [0.00000000359, 4.26088296989, 30831.5487222281],
    [0.00000000501, 1.02737770483, 44809.4063833799],
    [0.00000000409, 1.77188267484, 27197.03787618409],
    [0.00000000354, 2.84306437211, 10323.7356849139],
    [0.00000000354, 0.36763636808, 10103.3230424751],
    [0.00000000428, 2.67107743725, 13656.10430865991],
    [0.00000000467, 5.30307476925, 38.3768531213],
    [0.00000000343, 1.61330776142, 19786.9176235915],
    [0.00000000457, 0.79025821347, 18308.0510495271],
    [0.00000000399, 0.9853142721, 1052.51220067191],
    [0.00000000445, 4.32811724206, 30665.9111409493],
    [0.00000000344, 0.03854207192, 27490.9362955283],
    [0.00000000315, 0.01870495544, 20640.1140053435],
    [0.00000000399, 4.24912842655, 10212.0448909862],
    [0.00000000399, 5.24475762082, 10215.0138364028],
    [0.0000000039, 2.28211006759, 30000.2031698025],
    [0.0000000034, 1.17434519565, 22805.9793834771],
    [0.00000000398, 3.64836715501, 9836.1557557787],
    [0.00000000311, 4.76207516886, 22003.6708173863],
    [0.00000000404, 3.98593080978, 20352.0333113382],
    [0.00000000366, 1.12867710261, 16522.4158985187],
    [0.0000000035, 2.99077020749, 15874.37377787969],
    [0.00000000385, 1.36867906917, 20180.9832636761],
    [0.00000000379, 5.84551902141, 10590.9029716103],
    [0.00000000395, 0.41318733253, 17277.16311435029],
    [0.00000000383, 1.78033504479, 35372.1310834599],
    [0.00000000277, 3.16062357954, 10988.5643400515],
    [0.00000000365, 1.42467845102, 10349.1546887045],
    [0.00000000365, 1.78602228917, 10077.90403868451],
    [0.00000000336, 0.74013259732, 220.6564599223],
    [0.00000000313, 5.6661260385, 6309.1303523077],
    [0.00000000276, 5.59087067643, 26709.8907598969],
    [0.00000000283, 5.53432657905, 3904.1551939033],
    [0.00000000271, 3.85648651665, 9745.5643733401],
    [0.00000000321, 4.20436094748, 38734.6221419491],
    [0.00000000327, 6.11821528186, 9359.84534697549],
    [0.00000000264, 5.16095616548, 76.50988875911],
    [0.0000000031, 3.61551590451, 27991.15799567649],
    [0.00000000359, 3.38306212619, 45585.4166296709],
    [0.00000000326, 5.59092073268, 633.0275567967],
    [0.00000000314, 1.40080599663, 20406.0395144131],
    [0.00000000306, 1.1260945063, 2957.9597119601],
    [0.00000000266, 4.09083877114, 8635.69818627969],
    [0.00000000254, 5.63745242067, 10681.49435404891],
    [0.00000000343, 4.64295996667, 8106.4948561521],
    [0.000000003, 4.12771906867, 206.42936592071],
    [0.0000000025, 3.04073965857, 283.6155013817],
    [0.00000000336, 0.68541596989, 23581.0143598341],
    [0.00000000236, 5.97871163742, 10595.9382609507],
    [0.00000000234, 3.82015244691, 19624.9939787817],
    [0.00000000255, 2.78388035745, 213.0552779545],
    [0.00000000281, 0.78332195796, 9399.9790797347],
    [0.00000000314, 0.56852266937, 19786.42998862449],
    [0.00000000229, 4.91536328985, 574.10098085129],
    [0.00000000295, 3.93680452053, 31749.4790082099],
    [0.00000000316, 2.45044363511, 48739.6160795995],
    [0.00000000229, 4.45667675327, 949.4194264533],
    [0.00000000229, 6.25019131093, 19896.63630984389],
    [0.00000000257, 4.89479846572, 19360.3194327155],
    [0.00000000231, 4.386567699, 9264.35375472471],
    [0.00000000255, 4.03464641753, 9993.1167212557],
    [0.00000000255, 5.45923962984, 10433.9420061333],
    [0.00000000291, 0.75030918802, 9999.7426332895],
    [0.00000000285, 5.75179047399, 34596.1208371689],
    [0.00000000211, 0.1827646435, 10249.55723037191],
    [0.00000000211, 3.02793609669, 10177.5014970171],
    [0.00000000255, 2.42745847719, 11027.07964765431],
    [0.0000000022, 0.56223178729, 37.7838551523],
    [0.0000000028, 0.52583614761, 37410.32342239509],
    [0.00000000258, 5.27008173054, 29573.6049789265],
    [0.00000000247, 1.90810058449, 29587.8320729281],
    [0.00000000206, 3.3747264593, 30426.8013606785],
    [0.00000000263, 3.16130275876, 20433.9284569063],
    [0.00000000212, 3.16045353079, 10206.9008047945],
    [0.00000000212, 0.0502472094, 10220.15792259451],
    [0.00000000202, 0.82632204894, 16894.7542170941],
    [0.00000000272, 4.8509234912, 12320.56387123691],
    [0.00000000211, 5.11529334983, 11162.7049726643],
    [0.00000000197, 1.28459142755, 8734.17515466309],
    [0.00000000267, 4.30013889854, 377.6174253993],
    [0.00000000224, 3.35322427637, 9051.05465928671],
    [0.00000000186, 4.53704574212, 10251.6623993323],
    [0.00000000186, 4.95684030525, 10175.3963280567],
    [0.00000000258, 2.52339474378, 9864.60494324651],
    [0.00000000186, 4.77906943206, 40077.8633910035],
    [0.00000000233, 1.49242697658, 29089.0552334685],
    [0.00000000186, 4.86984152157, 17272.1278250099],
    [0.00000000254, 3.15931132763, 19264.3402054977],
    [0.00000000246, 0.68740453037, 10562.4537841425],
    [0.00000000211, 6.16254771086, 11376.0040681023],
    [0.00000000178, 0.50910605505, 10949.4058772263],
    [0.00000000178, 2.70159468514, 9477.65285016271],
    [0.00000000197, 0.95969377699, 1692.40948698591],
    [0.00000000177, 0.12290786955, 20316.6085886861],
    [0.00000000216, 2.56868513559, 20452.6255947383],
    [0.00000000197, 0.19093764884, 9050.56702431969],
    [0.00000000159, 1.16783306054, 27197.5255111511],
    [0.00000000167, 5.81167464279, 4705.4884900601],
    [0.00000000213, 2.13389038075, 27511.2240560537],
    [0.00000000154, 0.72358681867, 10199.3022696929],
    [0.00000000154, 2.48711392152, 10227.7564576961],
    [0.00000000174, 1.89882712841, 14.47091148511],
    [0.00000000209, 1.65966829596, 10063.4785315929],
    [0.00000000167, 3.57558694059, 6872.42930202769],
    [0.00000000185, 0.68349269134, 9256.75257275689],
    [0.00000000166, 3.75162140471, 10263.2863891663],
    [0.00000000166, 5.74226464266, 10163.7723382227],
    [0.00000000168, 5.3366255643, 7991.18509413049],
    [0.00000000174, 3.76838134579, 9161.2609805061],
    [0.00000000197, 3.4422189608, 846.3266522347],
    [0.00000000176, 4.69215492733, 9779.32999085069],
    [0.00000000198, 3.8855357135, 52669.8257758191],
    [0.00000000169, 5.71918201676, 11265.7977468829],
    [0.00000000188, 0.90560199287, 38526.3305333885],
    [0.0000000014, 0.96666880637, 27991.6456306435],
    [0.00000000194, 2.26842216085, 8837.26792888169],
    [0.00000000173, 1.30662690057, 9793.5570848523],
    [0.0000000014, 0.3302913937, 10191.6785343681],
    [0.0000000014, 2.88040934649, 10235.3801930209],
    [0.00000000196, 2.27385726594, 1293.24040609909],
    [0.0000000018, 4.38252963041, 10021.5934626159],
    [0.00000000138, 0.3849513713, 10217.4615169576],
    [0.00000000138, 2.82574936889, 10209.5972104314],
    [0.00000000148, 2.31505492408, 19374.5465267171],
    [0.00000000137, 3.95061609635, 16522.9035334857],
    [0.00000000143, 1.40332876782, 20447.5903053979],
    [0.00000000139, 5.72624016073, 7255.3258342509],
    [0.00000000126, 3.82073811345, 20277.2517127709],
    [0.00000000164, 4.79111675703, 49515.6263258905],
    [0.00000000149, 2.18564631641, 10135.8555932665],
    [0.00000000149, 1.02505442378, 10291.20313412251],
    [0.00000000118, 1.12766998844, 4551.7096795753],
    [0.00000000117, 0.93680170584, 1582.2031657665],
    [0.00000000151, 0.84241735172, 10246.0619144859],
    [0.00000000151, 2.36828338847, 10180.99681290311],
    [0.00000000152, 3.18276216864, 39302.3407796795],
    [0.00000000144, 3.82694942167, 9986.0532309055],
    [0.00000000144, 5.6669366257, 10441.00549648351],
    [0.00000000136, 2.08219853379, 17469.0990154289],
    [0.00000000119, 3.32943340593, 20809.2238071617],
    [0.0000000013, 5.57171941495, 10236.3045651453],
    [0.0000000013, 3.92216663242, 10190.7541622437],
    [0.00000000156, 4.19081128787, 20388.6818742677],
    [0.00000000132, 2.35919234539, 9580.2579894143],
    [0.00000000155, 0.85940280671, 8238.0368178385],
    [0.00000000142, 3.58430646945, 31441.4337522733],
    [0.00000000131, 5.39629404064, 8101.39141534989],
    [0.00000000133, 4.0054757705, 24382.8352909579],
    [0.00000000105, 4.2307715865, 32858.36992533629],
    [0.00000000105, 3.82110715168, 1059.1381127057],
    [0.00000000101, 4.35357648238, 24978.7684069643],
    [0.00000000126, 4.90495452705, 22645.57201409229],
    [0.00000000101, 5.26437713251, 20043.9183776823],
    [0.0000000011, 2.97625385917, 43071.65547154729],
    [0.00000000103, 0.46440823619, 12431.79883291429],
    [0.00000000136, 6.07687689635, 5999.4603486097],
    [0.00000000097, 0.92055841324, 853.4401992355],
    [0.0000000013, 3.21780638112, 4176.2851599325],
    [0.00000000113, 3.93650904588, 19794.0311705923],
    [0.00000000093, 5.4892785203, 22645.08437912529],
    [0.00000000124, 2.32988224429, 42456.5402296081],
    [0.00000000107, 4.30116108617, 3.6883357796],
    [0.00000000127, 3.54954178661, 284.1031363487],
    [0.00000000112, 2.47056814408, 20206.4022674667],
    [0.00000000097, 4.21617446768, 78263.95324220609],
    [0.00000000093, 0.23349714961, 8204.4841895685],
    [0.00000000127, 5.30922609526, 56600.0354720387],
    [0.00000000111, 4.68533396525, 18830.14083265389],
    [0.00000000098, 3.12531862236, 11059.6121984457],
    [0.00000000098, 0.08567718624, 9367.4465289433],
    [0.00000000103, 5.15240336002, 10244.4434893295],
    [0.00000000103, 4.34148268734, 10182.6152380595],
    [0.00000000111, 1.30087873837, 18844.36792665549],
    [0.00000000125, 2.35130115448, 12189.0219095505],
    [0.00000000088, 4.33292988106, 20350.5488386299],
    [0.00000000088, 2.436033389, 29058.1411078335],
    [0.00000000096, 3.91338437973, 2333.44021035551],
    [0.00000000122, 5.43206767869, 2636.9692901205],
    [0.00000000087, 1.36103886488, 8087.1643213483],
    [0.00000000086, 3.64796343622, 7034.8959381599],
    [0.00000000095, 2.03086124785, 10202.4836634306],
    [0.00000000095, 1.17983949234, 10224.5750639584],
    [0.00000000084, 1.22799614537, 10401.4545114571],
    [0.00000000084, 1.98270459482, 10025.6042159319],
    [0.00000000085, 5.03727591626, 19477.6393009357],
    [0.00000000086, 4.48909813316, 29864.0902098255],
    [0.00000000099, 2.8022335244, 2648.6986429565],
    [0.00000000082, 1.04973324929, 802.0647486073],
    [0.00000000087, 0.60735009545, 13745.10242153889],
    [0.00000000081, 0.59637598254, 1550.8014051645],
    [0.00000000083, 3.04079971271, 25933.8805136059],
    [0.00000000079, 6.14325401892, 44008.0730872231],
    [0.00000000078, 6.11312046046, 9573.6320773805],
    [0.00000000098, 5.37191506696, 20220.6293614683],
    [0.00000000108, 3.66133732652, 24149.8362338615],
    [0.000000001, 5.07064547333, 1596.43025976811],
    [0.00000000095, 3.35135945156, 29477.6257517087],
    [0.00000000078, 3.03881688108, 205.9417309537],
    [0.00000000096, 1.621544258, 30206.38871823969],
    [0.00000000079, 4.07943333749, 3340.36860921629],
    [0.00000000095, 4.51771749335, 30220.6158122413],
    [0.00000000082, 4.95983920368, 29043.91401383189],
    [0.00000000077, 2.97497430839, 17468.6113804619],
    [0.000000001, 4.43773436133, 38500.5198485557],
    [0.00000000107, 4.65407793574, 2069.2506523901],
    [0.00000000077, 3.58586905737, 10853.4266500085],
    [0.00000000087, 4.37137980512, 5.2791068239],
    [0.00000000076, 4.87466102622, 10243.35080184331],
    [0.00000000076, 4.61922502115, 10183.7079255457],
    [0.00000000076, 6.08417794379, 956.53297345411],
    [0.000000001, 2.63929709585, 28947.9347866141],
    [0.00000000096, 4.86017307249, 35371.6434484929],
    [0.00000000073, 0.32640489167, 17248.18148437089],
    [0.00000000073, 1.84890257629, 21001.1597082403],
    [0.00000000081, 2.26124411922, 18734.6492404031],
    [0.00000000076, 5.51994215698, 103.3365917021],
    [0.00000000085, 5.27676110314, 3914.71340755109],
    [0.00000000074, 1.92420691865, 8827.6340873583],
    [0.0000000007, 1.49155151362, 6298.57213865991],
    [0.00000000087, 2.91040927813, 33019.2649296881],
    [0.00000000071, 3.95908921272, 34172.1611489279],
    [0.00000000079, 2.65919074354, 10018.5579792339],
    [0.00000000079, 0.55150999665, 10408.5007481551],
    [0.00000000069, 6.05632855781, 33794.2999060451],
    [0.00000000087, 1.54753819207, 29050.53992586569],
    [0.00000000069, 0.90459565864, 41044.8342684391],
    [0.00000000069, 2.25427054035, 9644.7074896671],
    [0.00000000069, 0.95643019984, 10782.3512377219],
    [0.00000000087, 5.46685094593, 28313.0449871775],
    [0.00000000085, 3.77767527899, 46386.7499258277],
    [0.00000000083, 5.79338403589, 9721.86607123571],
    [0.00000000083, 3.70050201148, 10705.1926561533],
    [0.0000000009, 5.18770728347, 20049.4413019897],
    [0.00000000064, 5.86320987239, 9147.03388650451],
    [0.00000000076, 1.05201656383, 21486.1968400947],
    [0.00000000085, 1.34427023572, 19573.13089318649],
    [0.00000000063, 1.61314796366, 18314.67696156089],
    [0.00000000071, 6.14562384557, 1573.57660661529],
    [0.0000000007, 5.46351961493, 1580.6228433133],
    [0.0000000008, 6.26741884849, 39301.8531447125],
    [0.00000000067, 0.48701132675, 3956.2641985359],
    [0.00000000087, 5.47908021981, 29264.3266562707],
    [0.00000000063, 3.37584641365, 27461.46703058189],
    [0.0000000007, 5.75487124049, 1479.11039154791],
    [0.00000000081, 0.05555806146, 10205.92818172669],
    [0.0000000008, 0.23956461858, 38204.44354188749],
    [0.0000000006, 1.34871003737, 20421.2919855981],
    [0.00000000064, 4.30292059849, 18300.44986755929],
    [0.00000000076, 3.93986568359, 29683.81130014589],
    [0.00000000082, 0.4498198306, 60530.2451682583],
    [0.00000000077, 6.19200892946, 53445.8360221101],
    [0.00000000062, 1.28649446141, 11599.4246400307],
    [0.00000000058, 3.08211963404, 7576.8038910575],
    [0.00000000057, 3.67915137516, 11280.0248408845],
    [0.00000000059, 1.26040809465, 10255.0801546793],
    [0.00000000059, 1.95029264554, 10171.9785727097],
    [0.00000000057, 4.06263183264, 20464.84258254131],
    [0.00000000079, 1.97866126955, 10136.7756574519],
    [0.00000000066, 2.33925448441, 14169.5497447469],
    [0.00000000063, 3.68749019288, 18099.7594409665],
    [0.0000000006, 3.19857198519, 29786.9040743645],
    [0.00000000064, 5.57155183718, 30007.3167168033],
    [0.00000000054, 3.67263578488, 30666.3987759163],
    [0.00000000058, 3.05733553465, 75449.7506569799],
    [0.00000000073, 3.85067322628, 51449.5680807617],
    [0.00000000074, 5.48458129044, 21720.2991334881],
    [0.00000000063, 2.67652037589, 26736.1890796967],
    [0.00000000054, 3.91509939932, 38204.9311768545],
    [0.00000000072, 4.47140350205, 100608.3523767453],
    [0.00000000053, 3.80804701502, 419.72846135871],
    [0.00000000052, 2.09262980178, 40426.7878114515],
    [0.00000000052, 5.73445119519, 29580.23089096029],
    [0.00000000053, 1.24051301926, 419.2408263917],
    [0.00000000058, 1.31187367842, 20412.5878159039],
    [0.00000000054, 3.26242420831, 9366.9588939763],
    [0.00000000055, 3.59360279993, 9103.6631766341],
    [0.0000000005, 2.3789560663, 34570.3101523361],
    [0.00000000067, 2.64494428691, 632.5399218297],
    [0.0000000005, 1.18004520961, 37724.5096022647],
    [0.00000000069, 1.73296667148, 53284.94101775829],
    [0.00000000057, 1.89823008385, 8307.5769637871],
    [0.0000000005, 4.69860484886, 8417.7832850065],
    [0.00000000049, 1.91804881602, 26087.65932409069],
    [0.00000000064, 2.02816930105, 7064.3652031063],
    [0.00000000049, 1.71661686491, 14128.4865887291],
    [0.00000000056, 2.23445542422, 28418.2438215195],
    [0.00000000066, 6.05166710265, 19580.7320751543],
    [0.00000000047, 2.93855195986, 10742.73269382209],
    [0.00000000061, 1.41947943365, 43232.0628409321],
    [0.00000000061, 4.56107208724, 43232.5504758991],
    [0.00000000047, 4.81852576439, 38741.7356889499],
    [0.0000000005, 1.33989551475, 59161.1932343711],
    [0.00000000046, 2.23137394571, 18844.8555616225],
    [0.00000000054, 0.69428675399, 48947.9076881601],
    [0.00000000046, 4.63842079862, 3154.9309023791],
    [0.00000000046, 4.21170546636, 194.7275669771],
    [0.00000000056, 1.07866938616, 9936.7835918301],
    [0.00000000056, 2.13203135403, 10490.27513555891],
    [0.00000000054, 4.49664827025, 9922.5564978285],
    [0.00000000054, 4.99723777712, 10504.50222956051],
    [0.00000000059, 2.01423634465, 18204.47064034149],
    [0.00000000048, 1.22734670146, 38727.5085949483],
    [0.00000000057, 5.20275648643, 50316.9596220473],
    [0.00000000061, 5.98664723657, 10140.2322378355],
    [0.00000000061, 3.5072388108, 10286.8264895535],
    [0.00000000061, 0.57175194941, 6567.1789863401],
    [0.00000000048, 3.35196537073, 9246.5584862589],
    [0.0000000006, 2.77045228898, 3684.1342325067],
    [0.0000000006, 3.41701763721, 14427.5983787793],
    [0.00000000051, 2.29628619637, 47623.60896860609],
    [0.00000000051, 5.43142352332, 9566.03089541269],
    [0.00000000052, 0.06151623743, 8727.0616076623],
    [0.00000000057, 0.62091438086, 32243.2546833971],
    [0.00000000048, 2.05408316319, 433.9555553603],
    [0.00000000045, 5.52086086974, 10263.5259855987],
    [0.00000000045, 3.97302517763, 10163.53274179031],
    [0.00000000049, 1.65627933457, 9794.6049647939],
    [0.00000000049, 1.55442140562, 10632.45376259511],
    [0.00000000058, 6.19349919374, 1860.95904382949],
    [0.00000000047, 1.5091728049, 20142.9555910403],
    [0.00000000046, 5.38397167897, 2349.5868529063],
    [0.00000000044, 2.04804189558, 30632.98690911569],
    [0.00000000046, 4.70186674108, 2356.63308960431],
    [0.00000000041, 0.12858083101, 12850.2548363315],
    [0.00000000041, 1.71656432171, 8094.7655033161],
    [0.00000000042, 5.08304675769, 77802.6168107517],
    [0.00000000042, 2.81186817738, 25132.5472174491],
    [0.00000000043, 2.37147053321, 19359.83179774849],
    [0.0000000004, 3.89496191683, 10192.2663332351],
    [0.00000000042, 3.28822065771, 34363.6094150395],
    [0.00000000039, 4.35089840905, 109.9625037359],
    [0.00000000044, 4.4686358081, 79379.9603531995],
    [0.00000000043, 4.38742720144, 38734.13450698209],
    [0.00000000046, 0.42463075467, 17778.3600844325],
    [0.00000000039, 6.01839872141, 12565.9078824993],
    [0.00000000041, 0.30408875222, 27681.89692667289],
    [0.00000000053, 1.87369351531, 64460.4548644779],
    [0.00000000039, 3.44426638934, 28631.5429169575],
    [0.00000000052, 5.20963176413, 38631.5293677305],
    [0.00000000043, 6.14192058418, 11180.5002411301],
    [0.00000000039, 1.02239033953, 1265.81129610991],
    [0.00000000039, 3.80918822366, 7879.84533585549],
    [0.00000000039, 0.66759557007, 7880.3329708225],
    [0.00000000052, 1.99450435156, 1.7282901918],
    [0.00000000039, 0.47445196924, 54981.6287735731],
    [0.00000000047, 4.89376316808, 187.68133027909],
    [0.00000000044, 1.17091466926, 10168.3881440579],
    [0.00000000044, 2.03978607093, 10258.67058333111],
    [0.00000000048, 4.68507697395, 10063.9661665599],
    [0.00000000043, 5.12159413101, 22029.9691371861],
    [0.00000000051, 5.8931325867, 104538.5620729649],
    [0.00000000051, 6.27593957045, 16250.7735674565],
    [0.00000000037, 4.48693750961, 29161.2338820521],
    [0.00000000043, 4.92338640427, 10363.09256082911],
    [0.00000000038, 4.13589046896, 47917.5073879503],
    [0.00000000049, 4.56271718314, 66037.79840692569],
    [0.00000000037, 4.41298098667, 6257.0213476751],
    [0.00000000036, 2.97028336578, 8674.2134938825],
    [0.00000000045, 2.00823427492, 522.3336006103],
    [0.00000000049, 1.96278700412, 491.9071099423],
    [0.00000000042, 2.95264046208, 115674.52048208468],
    [0.0000000004, 6.06388400822, 10233.8171242199],
    [0.00000000036, 1.27578830807, 47938.2827834427],
    [0.00000000035, 2.75316747179, 12546.72575656651],
    [0.00000000048, 2.91217379208, 90395.0668305343],
    [0.0000000004, 2.61778472956, 14127.99895376209],
    [0.00000000044, 4.30648713686, 9698.0654926015],
    [0.00000000044, 5.18739891051, 10728.99323478751],
    [0.00000000036, 2.23668112498, 69942.1974183125],
    [0.00000000035, 2.59567778333, 41654.71929848429],
    [0.00000000034, 4.26526324958, 55798.7021758819],
    [0.00000000037, 3.2521944332, 35192.0539531753],
    [0.00000000046, 2.90936826705, 36301.4325052687],
    [0.00000000047, 1.48071490743, 86464.85713431469],
    [0.00000000035, 5.44812994648, 48732.98752069949],
    [0.00000000035, 4.79214932619, 10011.2759685204],
    [0.00000000035, 4.70173672118, 10415.78275886861],
    [0.00000000034, 6.17898420868, 37410.8110573621],
    [0.00000000033, 5.38008686554, 49477.59865325469],
    [0.00000000042, 4.39944587348, 18830.6284676209],
    [0.00000000035, 5.27547059803, 49515.1386909235],
    [0.00000000047, 0.65352099169, 31022.50935337269],
    [0.00000000034, 4.90000292698, 100909.28143881488],
    [0.00000000033, 3.7488973079, 10117.5501364767],
    [0.00000000033, 5.74498873947, 10309.5085909123],
    [0.00000000034, 4.93693556191, 7461.49412903589],
    [0.00000000034, 3.87169740614, 45584.9289947039],
    [0.00000000032, 0.10155743123, 9676.23721663209],
    [0.00000000039, 2.72509244693, 316.6356871401],
    [0.00000000033, 4.45732662556, 31748.99137324289],
    [0.00000000031, 3.44787752858, 30103.29594402109],
    [0.00000000035, 4.20052948408, 58946.27306691049],
    [0.00000000032, 3.76438941046, 21977.8601325535],
    [0.00000000036, 1.2286762382, 20430.7470631686],
    [0.00000000032, 0.22256920805, 81732.8265069713],
    [0.0000000003, 2.28012493395, 19573.6185281535],
    [0.00000000031, 2.48999281964, 11.2895177474],
    [0.00000000038, 4.9452672348, 20617.77554105009],
    [0.00000000033, 5.88114654745, 83310.1700494191],
    [0.00000000029, 0.24041771274, 11752.8452335065],
    [0.00000000029, 5.51688017902, 9801.1582668201],
    [0.00000000029, 3.97700586835, 10625.9004605689],
    [0.0000000003, 3.62180540908, 20432.3378342129],
    [0.00000000031, 4.94266626401, 7255.8134692179],
    [0.00000000029, 4.41071491793, 9889.53631207009],
    [0.00000000029, 1.77595651133, 224.5886131854],
    [0.00000000028, 0.27335698936, 10099.09007500929],
    [0.00000000028, 2.93734375083, 10327.96865237972],
    [0.00000000037, 0.0101257097, 47964.0934682755],
    [0.00000000029, 1.93091525734, 10426.3408241655],
    [0.00000000034, 4.22987244572, 1539.5596872955],
    [0.00000000039, 5.1893604457, 30563.8343848409],
    [0.00000000039, 1.33268449559, 5791.16874004909],
    [0.00000000028, 5.43649843683, 1178.9507215561],
    [0.00000000031, 5.4665088639, 39786.8905251375],
    [0.00000000028, 3.65949505965, 73872.40711453209],
    [0.00000000027, 0.53018129778, 9411.22079760369],
    [0.00000000028, 0.41914594254, 15694.7842825621],
    [0.00000000034, 3.6785630313, 40213.4887160135],
    [0.00000000037, 4.44226497286, 36949.4746259077],
    [0.00000000035, 3.56301256331, 37704.2218417393],
    [0.00000000028, 5.98328888184, 4732.2744448269],
    [0.00000000037, 2.63889784222, 13859.8797410489],
    [0.00000000035, 2.72288729195, 18093.13088206649],
    [0.00000000035, 5.86447994554, 18093.6185170335],
    [0.00000000031, 2.99968207636, 42430.7295447753],
    [0.00000000026, 4.09923425337, 8734.6627896301],
    [0.00000000028, 1.92482741603, 7886.4738947555],
    [0.00000000031, 0.27204438582, 25960.1788334057],
];

const X1: &[Term] = &[
    [0.00051880979, 2.2817527905, 0.2438174835],
    [0.0001726082, 0.9255849278, 20426.8149099055],
    [0.00011049864, 2.03460665124, 10213.0417287275],
    [0.00004831725, 4.77621954273, 10213.5293636945],
    [0.00000175352, 1.80600884943, 30640.1004561165],
    [0.00000060293, 4.92800632264, 8636.18582124671],
    [0.00000062982, 2.09113961987, 10187.2310438947],
    [0.00000062707, 1.11859002578, 10239.8276834943],
    [0.00000049342, 4.5744864396, 11790.8729061423],
    [0.00000036826, 2.07066164376, 775.7664288075],
    [0.00000039689, 3.30583760303, 20426.32727493849],
    [0.00000030101, 5.32708077931, 10022.0810975829],
    [0.0000002933, 4.16541909519, 10404.9776298061],
    [0.0000001999, 1.15893210018, 9438.0067523705],
    [0.00000017877, 2.07736309994, 10989.0519750185],
    [0.00000014175, 3.70557013555, 9683.8383985999],
    [0.00000013388, 1.3384445977, 191.2044486281],
    [0.00000013513, 5.77342390577, 10743.2203287891],
    [0.00000014034, 3.49932313102, 4705.9761250271],
    [0.00000013385, 1.15013591011, 19651.2922985815],
    [0.00000006873, 4.83631203632, 9104.1508116011],
    [0.00000007547, 5.57551333367, 1059.6257476727],
    [0.00000007388, 6.00037338177, 15721.0826023619],
    [0.00000005971, 4.65746818072, 11322.9079157879],
    [0.00000005966, 1.10731222776, 10220.6429106953],
    [0.00000005965, 2.10389967659, 10206.4158166937],
    [0.00000005155, 2.49611854501, 3154.4432674121],
    [0.00000004571, 4.59065584437, 20618.2631760171],
    [0.00000004246, 6.0541759989, 10000.23026825651],
    [0.00000004157, 3.4398164873, 10426.8284591325],
    [0.00000004649, 2.86570769042, 9830.6328314713],
    [0.00000004431, 0.3449959012, 10596.4258959177],
    [0.00000003938, 0.35777611387, 7.3573644843],
    [0.00000003399, 2.39541457575, 7860.6632099227],
    [0.00000002758, 3.91101238225, 19367.4329797163],
    [0.00000002699, 0.65662263221, 7058.8422787989],
    [0.00000002515, 5.65192320935, 8623.96883344369],
    [0.00000002725, 4.96638871958, 801.5771136403],
    [0.00000002539, 5.96953617871, 9411.7084325707],
    [0.00000001822, 3.32629702713, 1109.1347346099],
    [0.000000023, 3.51596869326, 11015.3502948183],
    [0.00000001816, 2.53054405922, 13368.2164485901],
    [0.00000001814, 4.85812202292, 3930.4535137031],
    [0.00000001586, 2.69305924606, 40853.3860023275],
    [0.00000001999, 2.52624662737, 26.0545023163],
    [0.00000001745, 2.26492854011, 4552.1973145423],
    [0.00000001503, 0.63999417521, 12566.3955174663],
    [0.00000001446, 3.9166547601, 7084.6529636317],
    [0.000000014, 6.24730767768, 11272.91129388371],
    [0.00000001282, 4.66310117053, 10219.0522880019],
    [0.00000001282, 4.83078487684, 10208.0064393871],
    [0.00000001352, 2.86394052328, 20419.7013629047],
    [0.00000001475, 5.68356978914, 3128.6325825793],
    [0.00000001235, 2.12083036469, 1577.5873599313],
    [0.00000001286, 5.69421578243, 23581.5019948011],
    [0.00000001283, 3.88408958331, 382.6527147397],
    [0.00000001171, 3.2884840051, 9154.1474335053],
    [0.00000001084, 4.35524384671, 10198.2768925095],
    [0.00000001084, 5.13864220066, 10228.78183487951],
    [0.00000001198, 4.95985546788, 16496.6052136859],
    [0.00000000869, 2.39926268528, 2352.6223362883],
    [0.00000001112, 0.28321011044, 1589.3167127673],
    [0.00000000922, 0.95607730643, 15874.8614128467],
    [0.00000000743, 0.6816145424, 28287.2343023447],
    [0.00000000746, 2.15375090404, 3149.4079780717],
    [0.00000000797, 5.1119324402, 426.8420083595],
    [0.00000000625, 3.18531726606, 20400.5165901057],
    [0.00000000615, 0.22278918989, 21536.1934619989],
    [0.00000000832, 1.92436994458, 21228.63584102931],
    [0.00000000656, 5.34274867064, 11014.8626598513],
    [0.00000000586, 2.16720042671, 5661.5758666357],
    [0.00000000648, 1.91289793451, 537.0483295789],
    [0.00000000674, 5.27695637784, 8094.2778683491],
    [0.00000000636, 0.25111675779, 18849.4713674577],
    [0.00000000655, 3.80934378726, 17298.4261448097],
    [0.00000000615, 2.39412529972, 522.8212355773],
    [0.00000000507, 0.55272313227, 20453.1132297053],
    [0.00000000451, 5.12854697169, 32217.4439985643],
    [0.0000000048, 2.46182518074, 529.44714761109],
    [0.00000000439, 3.76528392741, 6282.83203250789],
    [0.00000000439, 2.58129029648, 29051.0275608327],
    [0.0000000041, 5.46936106504, 24357.0246061251],
    [0.00000000452, 3.7621575901, 9146.54625153749],
    [0.00000000417, 4.91991688397, 6681.46867088311],
    [0.00000000434, 3.29962044494, 9160.77334553909],
    [0.00000000364, 2.71580018519, 10640.1275545705],
    [0.00000000363, 0.47492285209, 9786.9311728185],
    [0.00000000428, 0.81939944524, 20809.7114421287],
    [0.0000000044, 2.47378943911, 9690.9519456007],
    [0.0000000044, 0.73691128332, 10736.1067817883],
    [0.00000000372, 0.50265145827, 10251.55703633031],
    [0.00000000372, 2.70804928192, 10175.5016910587],
    [0.00000000319, 1.05799277323, 17277.6507493173],
    [0.00000000427, 2.95582453815, 18837.7420146217],
    [0.00000000319, 0.18812390399, 7860.17557495569],
    [0.00000000303, 1.07261427828, 14765.48286075331],
    [0.00000000351, 2.50811815863, 6490.0204047715],
    [0.00000000287, 0.1345381168, 1577.0997249643],
    [0.00000000318, 0.48117169551, 14945.0723560709],
    [0.00000000297, 1.06831804424, 10233.1991245943],
    [0.00000000297, 2.14238269595, 10193.85960279471],
    [0.00000000372, 5.93165702933, 22004.1584523533],
    [0.00000000311, 1.29581017314, 9683.35076363289],
    [0.00000000284, 2.3602581724, 3442.81876244891],
    [0.00000000269, 1.16222638968, 9573.14444241349],
    [0.00000000262, 3.22424327301, 21202.3375212295],
    [0.00000000285, 4.56673097639, 13745.5900565059],
    [0.00000000276, 1.42552468909, 9676.7248515991],
    [0.00000000289, 5.78612487399, 20235.36664379391],
    [0.00000000263, 5.63102915308, 22779.6810636773],
    [0.0000000028, 5.09544909614, 14919.2616712381],
    [0.00000000262, 1.80492967584, 10750.33387578991],
    [0.00000000256, 4.41502652709, 10234.3047591869],
    [0.00000000239, 4.74729006212, 5507.7970561509],
    [0.00000000253, 5.07523059777, 10192.7539682021],
    [0.00000000268, 0.81556729812, 27511.7116910207],
    [0.00000000282, 6.23856358633, 4731.7868098599],
    [0.00000000232, 4.24398296621, 3723.26514143949],
    [0.00000000285, 5.52678704563, 20956.5058750001],
    [0.00000000244, 3.89280464375, 2353.1099712553],
    [0.00000000272, 4.39654535286, 20000.2167190295],
    [0.00000000254, 4.68153309834, 6283.3196674749],
    [0.00000000238, 4.49319488898, 30639.61282114949],
    [0.00000000232, 1.29928686548, 19890.0103978101],
    [0.0000000021, 1.76685272207, 18073.46112116669],
    [0.00000000216, 4.76667969992, 18073.9487561337],
    [0.00000000199, 0.33116574732, 9639.18456535971],
    [0.00000000218, 0.81835363281, 19904.2374918117],
    [0.00000000225, 0.70271153327, 13937.0383226175],
    [0.00000000235, 3.30083410129, 1551.2890401315],
    [0.00000000191, 4.33367506839, 6872.91693699471],
    [0.00000000179, 0.13296789433, 30110.4094910219],
    [0.00000000185, 2.87950187226, 10787.8741620293],
    [0.00000000235, 2.81621171423, 1066.7392946735],
    [0.00000000208, 5.61842788521, 10007.3438152573],
    [0.00000000208, 3.87545816216, 10419.7149121317],
    [0.00000000179, 1.93004567854, 18875.2820522905],
    [0.00000000184, 1.66108282172, 9967.69771746511],
    [0.00000000166, 1.92550152422, 18307.56341456009],
    [0.00000000163, 4.95974146969, 10225.2587165305],
    [0.00000000163, 4.53414457768, 10201.80001085851],
    [0.00000000156, 6.06699266861, 10316.6221379131],
    [0.00000000156, 3.42689337876, 10110.4365894759],
    [0.00000000178, 1.54946223064, 10459.3610099239],
    [0.00000000172, 4.2858775233, 14143.7390599141],
    [0.00000000163, 3.33734155709, 8616.85528644289],
    [0.00000000163, 4.34265322302, 6.86972951729],
    [0.00000000157, 5.15568499427, 13554.1417903943],
    [0.00000000152, 5.19097050991, 640.1411037975],
    [0.00000000149, 4.59659252448, 7063.87756813929],
    [0.00000000179, 2.5767118706, 29864.5778447925],
    [0.0000000014, 3.74361509193, 8631.0823804445],
    [0.0000000014, 1.47790992779, 529.9347825781],
    [0.00000000131, 4.0227450951, 9794.0447198193],
    [0.0000000017, 1.92390663066, 9153.6597985383],
    [0.00000000128, 5.46982761491, 10633.0140075697],
    [0.00000000177, 4.6092549242, 5481.4987363511],
    [0.00000000154, 0.98130891951, 2119.00767786191],
    [0.00000000131, 0.85435524802, 16984.2399649401],
    [0.00000000131, 2.78432814801, 9437.5191174035],
    [0.00000000118, 0.3377041685, 11790.3852711753],
    [0.0000000014, 3.57821725968, 191.6920835951],
    [0.00000000143, 4.89084114003, 7994.77225950771],
    [0.00000000123, 2.80558057017, 213.5429129215],
    [0.00000000111, 1.17808071549, 8661.9965060795],
    [0.00000000121, 2.21290119959, 28521.3365957381],
    [0.00000000119, 1.63506882892, 3929.96587873609],
    [0.00000000106, 5.90822125685, 1109.6223695769],
    [0.00000000099, 2.30048706584, 20.5315780089],
    [0.00000000104, 6.17530863971, 36147.6536947839],
    [0.00000000107, 3.35632619038, 22805.4917485101],
    [0.00000000125, 4.66656170776, 12432.2864678813],
    [0.00000000101, 3.14294490163, 1052.51220067191],
    [0.00000000093, 0.14824204033, 574.10098085129],
    [0.00000000129, 4.90531185126, 7564.58690325449],
    [0.00000000092, 1.92722181403, 9359.84534697549],
    [0.00000000099, 2.32246660439, 31441.92138724031],
    [0.00000000091, 6.18685264626, 775.2787938405],
    [0.00000000112, 5.12786964903, 10186.7434089277],
    [0.00000000095, 3.66782801204, 10433.9420061333],
    [0.00000000095, 5.82605803532, 9993.1167212557],
    [0.00000000092, 0.35578303465, 14143.2514249471],
    [0.00000000096, 5.32806010513, 220.6564599223],
    [0.00000000084, 5.80809189896, 6770.46678376209],
    [0.00000000088, 1.99015323508, 11322.42028082089],
    [0.0000000011, 0.30263518591, 11802.6022589783],
    [0.00000000108, 5.1340033632, 29580.7185259273],
    [0.00000000093, 5.89321185295, 2957.9597119601],
    [0.00000000101, 2.0918687873, 6770.9544187291],
    [0.00000000105, 4.75827384051, 8662.48414104651],
    [0.00000000094, 1.4797876383, 20433.9284569063],
    [0.00000000089, 2.27805851709, 15720.5949673949],
    [0.00000000088, 5.79703525886, 206.42936592071],
    [0.00000000101, 2.0802726365, 7085.1405985987],
    [0.00000000077, 4.50520624769, 10177.5014970171],
    [0.00000000077, 4.98867979968, 10249.55723037191],
    [0.00000000087, 1.1547351711, 2378.9206560881],
    [0.0000000008, 1.3057800598, 5507.3094211839],
    [0.000000001, 4.88512859986, 14945.5599910379],
    [0.00000000096, 2.9151538444, 8624.45646841071],
    [0.00000000071, 1.17266085434, 24150.3238688285],
    [0.00000000089, 6.18976687503, 18875.76968725751],
    [0.00000000071, 0.26607557139, 29043.91401383189],
    [0.00000000075, 6.05522319041, 19897.1239448109],
    [0.00000000068, 3.96046123295, 10384.2022343137],
    [0.00000000068, 5.53342481442, 10042.8564930753],
    [0.00000000077, 0.65929723, 29573.6049789265],
    [0.00000000073, 0.21801456964, 29587.8320729281],
    [0.00000000063, 3.39603171816, 10239.3400485273],
    [0.00000000086, 3.93300049009, 19650.8046636145],
    [0.00000000086, 0.41942430117, 19360.3194327155],
    [0.00000000061, 0.66096242131, 29058.1411078335],
    [0.00000000081, 4.74585662186, 11764.5745863425],
    [0.00000000066, 4.80481512048, 26735.7014447297],
    [0.00000000075, 1.1491706646, 25934.3681485729],
    [0.00000000067, 1.15917986378, 40077.8633910035],
    [0.00000000059, 4.95335370099, 10988.5643400515],
    [0.00000000077, 0.71010883429, 20213.5158144675],
    [0.00000000077, 3.31402335732, 7834.3648901229],
    [0.00000000057, 1.06828917998, 10404.48999483909],
    [0.00000000057, 1.40187066473, 110.45013870291],
    [0.00000000067, 1.57273164979, 17777.87244946549],
    [0.0000000006, 6.21424049877, 30831.5487222281],
    [0.00000000058, 2.47733285182, 12592.2062022991],
    [0.00000000054, 4.901096019, 19317.43635781211],
    [0.00000000065, 3.16919569918, 25158.8455372489],
    [0.00000000064, 2.2089392061, 18308.0510495271],
    [0.00000000059, 0.10111317126, 9779.32999085069],
    [0.00000000053, 1.51934336072, 27490.9362955283],
    [0.0000000005, 1.75539922827, 10103.3230424751],
    [0.0000000005, 1.45530151192, 10323.7356849139],
    [0.0000000005, 6.21018693293, 39794.0040721383],
    [0.00000000055, 5.90009200198, 9793.5570848523],
    [0.00000000048, 4.23138520787, 29089.0552334685],
    [0.00000000051, 0.59694211544, 26709.8907598969],
    [0.00000000047, 3.85157632106, 16522.4158985187],
    [0.0000000006, 6.185816597, 12592.6938372661],
    [0.00000000057, 3.26039666468, 2218.51328670329],
    [0.00000000047, 3.62423252693, 20640.1140053435],
    [0.00000000046, 4.31718986476, 19786.9176235915],
    [0.00000000047, 2.61830291086, 57836.89451481709],
    [0.00000000045, 3.9391724978, 3532.3045102949],
    [0.00000000047, 0.02859294876, 22003.6708173863],
    [0.00000000045, 4.38533780662, 30000.2031698025],
    [0.00000000043, 5.13871521232, 29786.9040743645],
    [0.00000000051, 2.50512066478, 44008.0730872231],
    [0.00000000042, 4.64511163321, 9999.7426332895],
    [0.0000000005, 5.23051268807, 23581.0143598341],
    [0.00000000051, 1.29476911793, 13341.9181287903],
    [0.0000000004, 5.56163575062, 33019.2649296881],
    [0.00000000051, 1.12826192024, 13656.10430865991],
    [0.00000000048, 5.72986884882, 213.0552779545],
    [0.00000000039, 5.77845089286, 20447.5903053979],
    [0.00000000039, 1.1863093588, 10595.9382609507],
    [0.00000000042, 6.23472824067, 30665.9111409493],
    [0.00000000042, 0.50469059035, 3914.71340755109],
    [0.00000000042, 4.77756101392, 38204.9311768545],
    [0.00000000041, 3.6002553756, 17469.0990154289],
    [0.00000000036, 5.95301096335, 10077.90403868451],
    [0.00000000036, 3.54087508402, 10349.1546887045],
    [0.0000000004, 0.08435320836, 18830.14083265389],
    [0.00000000039, 5.88165362901, 18844.36792665549],
    [0.00000000034, 3.36376891454, 21001.1597082403],
    [0.00000000034, 1.57325955329, 13936.5506876505],
    [0.00000000032, 0.62824969555, 36949.4746259077],
    [0.00000000033, 4.53469110076, 16983.75232997309],
    [0.0000000004, 3.88665965181, 47938.2827834427],
    [0.00000000032, 5.46497273946, 39301.8531447125],
    [0.00000000032, 5.46497273946, 39302.3407796795],
    [0.00000000036, 0.13872965215, 19374.5465267171],
    [0.00000000032, 5.49940747482, 16894.7542170941],
    [0.00000000042, 0.37006377215, 55798.7021758819],
    [0.00000000031, 3.51648880247, 20043.9183776823],
    [0.00000000033, 1.44339512827, 48418.21672306549],
    [0.00000000031, 1.24271036891, 9573.6320773805],
    [0.00000000034, 5.27191504099, 54247.1693182669],
    [0.00000000032, 2.12080485437, 10191.6785343681],
    [0.00000000032, 1.08989588581, 10235.3801930209],
    [0.00000000031, 2.88701937696, 8087.1643213483],
    [0.00000000032, 1.43989537444, 19896.63630984389],
    [0.00000000036, 0.86097595428, 7255.3258342509],
    [0.0000000003, 1.9666196176, 10853.4266500085],
    [0.00000000037, 0.40709954927, 27511.2240560537],
    [0.00000000032, 3.94523183143, 19366.94534474929],
    [0.00000000029, 5.21162982204, 10291.20313412251],
    [0.00000000029, 4.28225622533, 10135.8555932665],
    [0.00000000028, 5.74069429835, 104351.8563837803],
    [0.00000000032, 4.165825918, 20206.4022674667],
    [0.00000000029, 6.04399510869, 29864.0902098255],
    [0.00000000029, 3.70427099153, 49515.1386909235],
    [0.00000000027, 5.20809241529, 5661.0882316687],
    [0.00000000034, 2.13914627667, 9161.2609805061],
    [0.00000000027, 2.35964005449, 6872.42930202769],
    [0.00000000032, 5.37255836333, 9836.1557557787],
    [0.00000000032, 4.12132768404, 10590.9029716103],
    [0.00000000027, 6.2529331161, 6298.57213865991],
    [0.00000000035, 5.35069959846, 9986.0532309055],
    [0.00000000035, 4.14318644891, 10441.00549648351],
    [0.00000000033, 2.06705744681, 31441.4337522733],
    [0.00000000026, 1.99269274261, 40879.6843221273],
    [0.00000000034, 2.86141693506, 1059.1381127057],
    [0.00000000028, 3.27143415157, 27197.03787618409],
    [0.00000000026, 4.77604105797, 34363.6094150395],
    [0.00000000032, 1.06669637529, 11265.7977468829],
    [0.00000000029, 3.31179813455, 30206.38871823969],
    [0.00000000032, 5.28518925051, 51868.4924796623],
    [0.00000000029, 3.60960317836, 35371.6434484929],
    [0.00000000029, 3.60960317836, 35372.1310834599],
    [0.00000000027, 1.39820608512, 34596.1208371689],
    [0.00000000033, 1.79087945691, 59728.91187210151],
    [0.00000000029, 3.70229059266, 20220.6293614683],
    [0.00000000025, 4.71719114041, 25933.8805136059],
    [0.00000000024, 5.8567432723, 8734.17515466309],
    [0.00000000027, 2.50446352876, 66813.80865321669],
    [0.00000000024, 1.21352192025, 36173.4643796167],
    [0.00000000024, 4.42282415616, 31022.9969883397],
    [0.00000000023, 0.26441959495, 24382.8352909579],
    [0.00000000028, 1.01958443856, 27461.46703058189],
    [0.00000000027, 2.82757763572, 30220.6158122413],
    [0.00000000023, 2.71148449796, 10367.3081741793],
    [0.00000000023, 0.49921624223, 10059.7505532097],
    [0.00000000023, 5.14356401989, 20452.6255947383],
    [0.00000000026, 2.79748800924, 39271.4266540445],
    [0.00000000026, 3.27996977321, 39257.1995600429],
    [0.00000000022, 0.64539022706, 43232.0628409321],
    [0.00000000022, 0.64539022706, 43232.5504758991],
    [0.00000000026, 3.68377277974, 8101.39141534989],
    [0.00000000022, 2.92850972756, 24978.7684069643],
    [0.00000000022, 2.54378881371, 25158.3579022819],
    [0.0000000003, 4.35689894819, 17248.18148437089],
    [0.00000000022, 4.40135816223, 27991.15799567649],
    [0.00000000022, 1.75419561511, 30426.8013606785],
    [0.00000000022, 5.61039853516, 802.0647486073],
    [0.00000000028, 5.29619670984, 17297.9385098427],
    [0.00000000021, 1.01517564916, 9147.03388650451],
    [0.00000000024, 5.57258032099, 46386.7499258277],
    [0.00000000021, 2.72351924355, 27197.5255111511],
    [0.00000000021, 3.36801059218, 44809.8940183469],
    [0.00000000024, 5.9001507975, 52176.0501006319],
    [0.00000000025, 4.38058629438, 22805.9793834771],
    [0.00000000022, 0.93569574784, 9566.03089541269],
    [0.00000000023, 2.47187255983, 6309.1303523077],
    [0.00000000021, 2.05775290145, 10949.4058772263],
    [0.00000000021, 1.15294783874, 9477.65285016271],
    [0.00000000024, 0.56697771725, 10288.3109622618],
    [0.00000000024, 2.64372302294, 10138.7477651272],
    [0.00000000027, 0.54831840561, 9580.2579894143],
    [0.0000000002, 5.88803150614, 8635.69818627969],
    [0.0000000002, 2.21258610934, 11280.0248408845],
    [0.00000000021, 3.74792739506, 3531.81687532789],
    [0.00000000022, 1.10471815077, 62883.5989569971],
    [0.0000000002, 4.47242869756, 17468.6113804619],
    [0.00000000023, 2.67526294292, 10263.2863891663],
    [0.00000000023, 0.53543779727, 10163.7723382227],
    [0.00000000027, 4.35265351175, 32216.95636359729],
    [0.00000000021, 0.20196459716, 47624.0966035731],
    [0.00000000023, 4.44238440406, 55022.6919295909],
    [0.00000000021, 5.91319275029, 18300.44986755929],
    [0.00000000026, 3.21324974687, 63659.1215683211],
    [0.00000000021, 1.29300419185, 43071.65547154729],
    [0.00000000019, 1.80883011026, 20316.6085886861],
    [0.00000000027, 2.91239597616, 28286.74666737769],
    [0.0000000002, 0.92201397306, 62081.7780258733],
    [0.00000000021, 3.71520409064, 24341.7721349401],
    [0.0000000002, 2.70818412083, 49477.59865325469],
    [0.0000000002, 3.92540543269, 70744.0183494363],
    [0.00000000018, 3.24042993488, 14128.4865887291],
    [0.00000000022, 1.96762524944, 27991.6456306435],
    [0.00000000018, 5.40557069193, 9050.56702431969],
    [0.00000000018, 1.21555571929, 4705.4884900601],
    [0.00000000017, 1.63173823644, 28313.0449871775],
    [0.00000000017, 4.46941749243, 10497.38868255971],
    [0.00000000017, 5.02446855494, 9929.6700448293],
    [0.00000000017, 0.77261247444, 19624.9939787817],
    [0.00000000018, 5.82240394487, 29050.53992586569],
    [0.00000000017, 6.13439373448, 18314.67696156089],
    [0.00000000016, 4.75152522759, 48740.1037145665],
    [0.00000000018, 2.82811097731, 38526.3305333885],
    [0.00000000018, 0.02896271913, 42430.7295447753],
    [0.00000000018, 4.17302923646, 42456.5402296081],
    [0.00000000018, 1.01249884206, 33794.2999060451],
    [0.00000000018, 1.01249884206, 33794.7875410121],
    [0.00000000016, 5.43519924864, 9745.5643733401],
    [0.00000000016, 4.05868679873, 10681.49435404891],
    [0.00000000016, 4.91307958316, 38734.6221419491],
    [0.00000000016, 1.98563978946, 47162.2725371517],
    [0.00000000016, 1.98563978946, 47162.7601721187],
    [0.00000000015, 5.40287159543, 10199.3022696929],
    [0.00000000015, 4.09101445194, 10227.7564576961],
    [0.00000000015, 4.40286421658, 41654.71929848429],
    [0.00000000017, 0.71063741169, 50316.9596220473],
    [0.00000000015, 2.70406423385, 53285.4286527253],
    [0.00000000015, 2.34568334494, 66011.98772209289],
    [0.00000000015, 2.83728676171, 38727.5085949483],
    [0.00000000015, 1.51871369727, 46360.9392409949],
    [0.00000000019, 4.60379625756, 67589.3312645407],
    [0.00000000014, 1.35244180937, 21228.1482060623],
    [0.00000000014, 0.37440411348, 40000.1896205755],
    [0.00000000014, 1.52734358006, 11027.07964765431],
    [0.00000000014, 1.68335716013, 9399.9790797347],
    [0.00000000014, 1.39514541459, 37895.6701078509],
    [0.00000000014, 1.44888424284, 37410.8110573621],
    [0.00000000014, 2.9421573329, 50291.1489372145],
    [0.00000000013, 4.17219621815, 12565.9078824993],
    [0.00000000015, 6.22361957178, 21486.1968400947],
    [0.00000000013, 6.14132227253, 52670.3134107861],
];

const X2: &[Term] = &[
    [0.00039116576, 4.74721085665, 10213.5293636945],
    [0.00001782208, 4.51495547304, 0.2438174835],
    [0.00000953335, 3.63516488566, 10213.0417287275],
    [0.00000818754, 5.17913474548, 20426.8149099055],
    [0.00000012014, 5.55504004602, 30640.1004561165],
    [0.00000008598, 0.48030487437, 10239.8276834943],
    [0.00000008636, 2.67172999291, 10187.2310438947],
    [0.00000003631, 5.13091719462, 20426.32727493849],
    [0.00000002965, 3.11794464067, 8636.18582124671],
    [0.00000003797, 0.73505869096, 9438.0067523705],
    [0.00000003421, 2.39489149839, 10989.0519750185],
    [0.00000002218, 3.69616749811, 10022.0810975829],
    [0.00000002134, 5.69388419448, 10404.9776298061],
    [0.00000002187, 6.14628758046, 11790.8729061423],
    [0.00000001794, 0.26131314165, 775.7664288075],
    [0.00000001421, 1.89983182794, 2353.1099712553],
    [0.00000000972, 2.65726077013, 1577.0997249643],
    [0.00000000682, 1.68817935727, 4705.9761250271],
    [0.00000000658, 4.84602149726, 9683.8383985999],
    [0.00000000715, 1.34290194955, 9830.6328314713],
    [0.00000000683, 1.84498400268, 10596.4258959177],
    [0.00000000568, 2.68352094618, 19651.2922985815],
    [0.00000000544, 3.07694729173, 191.2044486281],
    [0.00000000678, 4.45588465096, 18073.9487561337],
    [0.00000000574, 5.09706238916, 801.5771136403],
    [0.00000000418, 4.31488544265, 10743.2203287891],
    [0.00000000561, 3.32645295084, 6283.3196674749],
    [0.00000000531, 0.97430911335, 7058.8422787989],
    [0.00000000371, 5.86501171146, 9411.7084325707],
    [0.00000000414, 2.16574465889, 529.9347825781],
    [0.00000000287, 3.12423584879, 9104.1508116011],
    [0.00000000314, 1.28037944612, 15721.0826023619],
    [0.00000000301, 2.30568402177, 26.0545023163],
    [0.00000000354, 2.15592461692, 13368.2164485901],
    [0.00000000361, 3.03077999717, 14143.7390599141],
    [0.00000000349, 2.69866467882, 22004.1584523533],
    [0.00000000253, 3.49550693096, 1059.6257476727],
    [0.00000000253, 6.11019925201, 11322.9079157879],
    [0.00000000253, 4.31046856084, 3154.4432674121],
    [0.00000000321, 3.51926077378, 11015.3502948183],
    [0.00000000305, 5.79665591896, 3128.6325825793],
    [0.00000000202, 1.70860223309, 10426.8284591325],
    [0.00000000195, 6.03063629123, 20618.2631760171],
    [0.00000000178, 1.34005224381, 10000.23026825651],
    [0.00000000157, 6.22467540109, 40853.3860023275],
    [0.00000000159, 5.43308713463, 382.6527147397],
    [0.00000000177, 1.96418161194, 21228.63584102931],
    [0.00000000126, 2.62766766451, 18849.4713674577],
    [0.00000000131, 0.73006046049, 1577.5873599313],
    [0.00000000148, 4.01019073124, 5507.3094211839],
    [0.00000000139, 4.5576567538, 7860.6632099227],
    [0.00000000146, 4.19737673183, 19897.1239448109],
    [0.00000000133, 3.60550981906, 17298.4261448097],
    [0.00000000088, 0.74174526538, 8623.96883344369],
    [0.00000000116, 3.5600259429, 9153.6597985383],
    [0.00000000111, 5.81554919476, 20453.1132297053],
    [0.00000000077, 5.72141298699, 7084.6529636317],
    [0.00000000081, 3.85700349092, 2352.6223362883],
    [0.00000000088, 0.02333507058, 3930.4535137031],
    [0.00000000077, 3.12509816452, 16496.6052136859],
    [0.00000000069, 1.03046490507, 23581.5019948011],
    [0.00000000058, 4.44021603496, 9154.1474335053],
    [0.00000000062, 5.17807799754, 1109.1347346099],
    [0.00000000063, 5.42244602531, 9437.5191174035],
    [0.00000000047, 3.73566941706, 29051.0275608327],
    [0.00000000054, 2.34590128189, 20809.7114421287],
    [0.00000000055, 0.27212302992, 4731.7868098599],
    [0.00000000046, 5.56053620908, 19367.4329797163],
    [0.00000000044, 4.38854627107, 10787.8741620293],
    [0.00000000044, 5.10533977629, 9639.18456535971],
    [0.0000000004, 0.19406822983, 8094.2778683491],
    [0.00000000041, 0.23997896197, 3929.96587873609],
    [0.00000000047, 4.99296496795, 12566.3955174663],
    [0.00000000038, 5.33087019939, 6282.83203250789],
    [0.00000000045, 4.21174903018, 25934.3681485729],
    [0.00000000034, 4.95079079946, 28287.2343023447],
    [0.00000000033, 0.84076094156, 11014.8626598513],
    [0.00000000034, 1.04665276837, 14919.2616712381],
    [0.00000000032, 3.42124102189, 24357.0246061251],
    [0.00000000028, 3.83338891686, 20235.36664379391],
    [0.0000000004, 3.61668312604, 29580.7185259273],
    [0.00000000033, 5.35791701104, 4552.1973145423],
    [0.00000000033, 0.97035705954, 6490.0204047715],
    [0.00000000027, 0.80253867623, 10640.1275545705],
    [0.00000000026, 2.37794131191, 9786.9311728185],
    [0.00000000026, 0.52950336946, 3149.4079780717],
    [0.00000000025, 2.09390807595, 10192.7539682021],
    [0.00000000025, 4.262812085, 10234.3047591869],
    [0.00000000024, 1.66809456061, 21536.1934619989],
    [0.00000000026, 5.0041141607, 14143.2514249471],
    [0.00000000024, 6.24637715602, 18307.56341456009],
    [0.00000000024, 6.23872379023, 5507.7970561509],
    [0.00000000025, 0.42768275114, 18875.2820522905],
    [0.0000000003, 3.82426253554, 20400.5165901057],
    [0.00000000025, 2.48440063286, 27511.7116910207],
    [0.00000000025, 1.71524233724, 8661.9965060795],
    [0.00000000019, 5.30003473361, 11272.91129388371],
    [0.00000000022, 0.30636210636, 30639.61282114949],
    [0.00000000026, 2.43625052079, 213.5429129215],
    [0.00000000018, 3.3414318643, 28521.3365957381],
    [0.00000000023, 2.19310017282, 13937.0383226175],
    [0.00000000024, 0.64478935102, 13367.7288136231],
    [0.00000000021, 0.3878941653, 10186.7434089277],
    [0.00000000019, 2.1354009549, 10988.5643400515],
    [0.00000000018, 3.02877957634, 32217.4439985643],
    [0.0000000002, 5.05892110724, 191.6920835951],
    [0.00000000017, 1.00021130316, 15874.8614128467],
    [0.00000000014, 3.13205445097, 21202.3375212295],
    [0.00000000014, 2.49765103801, 17277.6507493173],
    [0.00000000015, 0.11837091281, 18073.46112116669],
    [0.00000000014, 4.77259175609, 10239.3400485273],
    [0.00000000014, 2.3897905042, 14945.0723560709],
    [0.00000000014, 4.18962126273, 8662.48414104651],
    [0.00000000014, 5.23413049702, 11764.5745863425],
    [0.00000000013, 1.93488532828, 34570.3101523361],
    [0.00000000013, 0.61222694816, 22779.6810636773],
    [0.00000000012, 3.85463106546, 31441.92138724031],
    [0.00000000011, 4.275505179, 10220.6429106953],
    [0.00000000011, 2.07789625538, 10206.4158166937],
    [0.0000000001, 3.61798826402, 7.3573644843],
    [0.0000000001, 1.57784029028, 22003.6708173863],
    [0.00000000012, 3.46936245747, 25158.8455372489],
    [0.00000000009, 3.35948007941, 38500.5198485557],
    [0.0000000001, 2.93060547107, 11790.3852711753],
    [0.00000000012, 2.06733085074, 17297.9385098427],
    [0.00000000008, 2.77292844888, 10404.48999483909],
    [0.00000000009, 4.94797813171, 29089.0552334685],
    [0.00000000007, 1.94867772097, 43232.5504758991],
    [0.00000000007, 6.01401025413, 30000.2031698025],
    [0.00000000009, 4.47573265145, 7860.17557495569],
    [0.00000000009, 4.90406740797, 3531.81687532789],
    [0.00000000007, 1.80027626747, 22805.4917485101],
    [0.00000000007, 1.18159563994, 529.44714761109],
];

const X3: &[Term] = &[
    [0.00000055518, 5.27636048864, 10213.0417287275],
    [0.00000057047, 5.8793677019, 0.2438174835],
    [0.00000032093, 3.056124942, 20426.8149099055],
    [0.00000018867, 4.86548938285, 10213.5293636945],
    [0.00000000716, 3.26370970167, 30640.1004561165],
    [0.00000000218, 0.66337297711, 20426.32727493849],
    [0.00000000032, 0.22308629368, 8636.18582124671],
    [0.00000000034, 2.69459006102, 10239.8276834943],
    [0.00000000034, 3.66311278763, 10187.2310438947],
    [0.00000000027, 6.14322148767, 11790.8729061423],
    [0.0000000002, 3.64902570031, 775.7664288075],
    [0.00000000016, 0.61723457662, 10022.0810975829],
    [0.00000000016, 5.73871486925, 10404.9776298061],
    [0.0000000001, 3.76695027338, 40853.3860023275],
    [0.0000000001, 2.80431500839, 9438.0067523705],
    [0.0000000001, 3.65133831937, 10989.0519750185],
    [0.00000000008, 5.27853417078, 9683.8383985999],
    [0.00000000007, 6.04834530223, 191.2044486281],
    [0.00000000007, 1.06297780672, 10743.2203287891],
    [0.00000000008, 5.07274318566, 4705.9761250271],
    [0.00000000007, 2.72342831598, 19651.2922985815],
    [0.00000000004, 0.12637968025, 9104.1508116011],
    [0.00000000004, 0.8662532832, 1059.6257476727],
    [0.00000000004, 1.29045440101, 15721.0826023619],
    [0.00000000003, 6.23075905972, 11322.9079157879],
];

const X4: &[Term] = &[
    [0.00000083081, 1.47755047593, 10213.5293636945],
    [0.00000002486, 0.71777141614, 10213.0417287275],
    [0.00000000657, 1.07128766548, 20426.8149099055],
    [0.00000000217, 3.60535760515, 0.2438174835],
    [0.00000000035, 0.98556560154, 30640.1004561165],
    [0.00000000011, 2.44309012697, 20426.32727493849],
    [0.00000000005, 2.06924437235, 10239.8276834943],
    [0.00000000005, 4.2607926622, 10187.2310438947],
    [0.00000000003, 4.92755555887, 2353.1099712553],
    [0.00000000002, 4.89604781036, 8636.18582124671],
    [0.00000000002, 5.91399711778, 1577.0997249643],
    [0.00000000002, 2.29946508014, 9438.0067523705],
];

const X5: &[Term] = &[
    [0.00000000631, 1.5992546086, 10213.5293636945],
    [0.00000000095, 2.54586723363, 10213.0417287275],
    [0.00000000088, 1.72183649952, 0.2438174835],
    [0.0000000004, 5.81128931245, 20426.8149099055],
];

const Y0: &[Term] = &[
    [0.72268045621, 1.60535036499, 10213.5293636945],
    [0.00733886107, 3.86619610007, 0.2438174835],
    [0.00244692613, 2.48525998209, 20426.8149099055],
    [0.00063317702, 2.0641504388, 10213.0417287275],
    [0.00002795043, 5.04300618072, 2353.1099712553],
    [0.00001941766, 5.80436164129, 1577.0997249643],
    [0.00001242687, 3.36533956931, 30640.1004561165],
    [0.00001163369, 1.30924660823, 18073.9487561337],
    [0.0000104428, 0.18242473165, 6283.3196674749],
    [0.0000076742, 5.30492070227, 529.9347825781],
    [0.00000669994, 6.1699630737, 14143.7390599141],
    [0.00000657435, 5.21342894071, 8636.18582124671],
    [0.00000476814, 4.27269799631, 10187.2310438947],
    [0.00000475078, 2.07969169968, 10239.8276834943],
    [0.00000559353, 5.87818075735, 22004.1584523533],
    [0.00000544577, 1.14724395566, 11790.8729061423],
    [0.0000040802, 2.35529138555, 775.7664288075],
    [0.00000281345, 1.23218938626, 9683.8383985999],
    [0.00000270035, 2.10691120117, 9438.0067523705],
    [0.0000026886, 5.13228928315, 10743.2203287891],
    [0.0000029998, 0.94363100672, 5507.3094211839],
    [0.00000214307, 5.46162572826, 10022.0810975829],
    [0.00000241347, 4.23602697206, 10989.0519750185],
    [0.00000208372, 0.89206276557, 10404.9776298061],
    [0.00000271224, 1.05337463479, 19897.1239448109],
    [0.00000264276, 0.40825385367, 9153.6597985383],
    [0.00000214535, 2.94606412427, 20426.32727493849],
    [0.00000175488, 1.41092496739, 191.2044486281],
    [0.00000123055, 0.01778159955, 1059.6257476727],
    [0.0000015423, 3.78480528747, 4705.9761250271],
    [0.00000147037, 3.98774418232, 19651.2922985815],
    [0.00000100153, 2.36411678071, 9437.5191174035],
    [0.00000069555, 4.80550652867, 9104.1508116011],
    [0.00000060317, 1.54595691846, 11322.9079157879],
    [0.00000081789, 2.57258880007, 15721.0826023619],
    [0.00000058874, 1.48684982669, 20618.2631760171],
    [0.00000060776, 2.2139124056, 4552.1973145423],
    [0.00000046411, 5.23309117015, 10192.7539682021],
    [0.00000046285, 1.11880987202, 10234.3047591869],
    [0.00000062288, 1.02030092694, 25934.3681485729],
    [0.00000050365, 0.03955377805, 8623.96883344369],
    [0.00000057275, 2.2131882183, 3154.4432674121],
    [0.00000044993, 0.06128576651, 19367.4329797163],
    [0.00000040167, 1.64087495621, 9411.7084325707],
    [0.00000047716, 5.57543351345, 213.5429129215],
    [0.00000039763, 3.21104786001, 801.5771136403],
    [0.00000036106, 4.71533355073, 11015.3502948183],
    [0.0000004515, 0.48042336302, 29580.7185259273],
    [0.00000036973, 2.82409044668, 7058.8422787989],
    [0.00000044928, 3.79012120364, 13367.7288136231],
    [0.00000027822, 3.37420388243, 1109.1347346099],
    [0.00000031714, 4.13937067249, 15874.8614128467],
    [0.00000036279, 2.3456194336, 10000.23026825651],
    [0.0000003536, 4.01138333911, 10426.8284591325],
    [0.0000002553, 3.98045270905, 7860.6632099227],
    [0.00000024951, 3.53621528232, 13368.2164485901],
    [0.00000020285, 1.13150552857, 10220.6429106953],
    [0.00000020275, 5.21708912625, 10206.4158166937],
    [0.00000021291, 1.37841249317, 3128.6325825793],
    [0.00000019173, 0.47393618404, 7.3573644843],
    [0.00000018901, 0.61568845651, 26.0545023163],
    [0.00000021874, 5.21237379147, 17297.9385098427],
    [0.00000019888, 1.40722670834, 3930.4535137031],
    [0.00000015237, 2.81371946863, 9830.6328314713],
    [0.00000017432, 1.76492288618, 3531.81687532789],
    [0.00000014522, 3.53852074947, 10596.4258959177],
    [0.00000016153, 3.63782003268, 7084.6529636317],
    [0.00000016091, 0.78643837533, 20213.5158144675],
    [0.00000014842, 2.49914152987, 29864.5778447925],
    [0.00000011112, 2.2007705664, 28287.2343023447],
    [0.00000012828, 0.47914049065, 1589.3167127673],
    [0.00000011212, 0.90580714897, 9154.1474335053],
    [0.00000014376, 2.29215877818, 23581.5019948011],
    [0.00000012175, 3.29545280575, 21228.63584102931],
    [0.00000009393, 5.33561048405, 11272.91129388371],
    [0.00000012824, 2.98347327697, 18837.25437965469],
    [0.00000009207, 5.34806792169, 5661.5758666357],
    [0.00000008622, 3.39909215992, 21536.1934619989],
    [0.00000011653, 4.63096590501, 3340.8562441833],
    [0.00000011496, 0.35144252183, 21228.1482060623],
    [0.00000009511, 4.97800970942, 17298.4261448097],
    [0.00000011281, 6.15396443981, 9786.44353785149],
    [0.00000008498, 2.2856093107, 1577.5873599313],
    [0.00000010763, 5.94541313957, 9929.6700448293],
    [0.00000008847, 0.10898852487, 29051.0275608327],
    [0.00000010378, 0.40689046689, 10497.38868255971],
    [0.00000007498, 4.24537566245, 40853.3860023275],
    [0.00000007375, 5.51259327017, 16496.6052136859],
    [0.00000008792, 5.18118052745, 10208.0064393871],
    [0.00000008786, 1.17109977444, 10219.0522880019],
    [0.00000007423, 2.5906794838, 10175.5016910587],
    [0.00000007386, 3.76162100212, 10251.55703633031],
    [0.00000006692, 5.95406544386, 8094.2778683491],
    [0.00000006531, 5.88279509444, 20419.7013629047],
    [0.00000005876, 0.45809002649, 32217.4439985643],
    [0.00000007945, 1.89399424197, 12566.3955174663],
    [0.00000005723, 0.73880953765, 24357.0246061251],
    [0.0000000596, 5.04842520573, 6681.46867088311],
    [0.00000005974, 0.59430542004, 426.8420083595],
    [0.00000005761, 2.33144379428, 2352.6223362883],
    [0.00000007279, 5.0694836232, 11014.8626598513],
    [0.00000004942, 2.08880442511, 3149.4079780717],
    [0.00000005638, 3.95061708151, 382.6527147397],
    [0.00000006069, 4.02647068871, 9683.35076363289],
    [0.00000004581, 1.06268488434, 14765.48286075331],
    [0.00000006372, 1.77392148125, 25158.3579022819],
    [0.00000004902, 5.88378200448, 18837.7420146217],
    [0.00000004698, 4.9870984539, 18849.4713674577],
    [0.00000005371, 2.87505683972, 26088.1469590577],
    [0.00000005495, 1.72171503357, 17086.2024832057],
    [0.00000005381, 3.840167237, 33794.7875410121],
    [0.0000000487, 1.21408319983, 20453.1132297053],
    [0.00000003922, 1.30852789776, 13745.5900565059],
    [0.00000004608, 5.91400382368, 5661.0882316687],
    [0.0000000397, 4.65819000475, 4731.7868098599],
    [0.00000003556, 5.06044480376, 1551.2890401315],
    [0.00000004329, 1.83456881254, 23958.8756027169],
    [0.00000003274, 5.00533011391, 529.44714761109],
    [0.00000003328, 2.6185578037, 18307.56341456009],
    [0.00000002787, 3.62713580728, 11790.3852711753],
    [0.00000003603, 0.20878953983, 14945.0723560709],
    [0.00000002949, 1.2528349654, 10198.2768925095],
    [0.00000002944, 5.09946216488, 10228.78183487951],
    [0.00000003221, 5.14877320464, 20400.5165901057],
    [0.00000003653, 3.19373783247, 29088.5675985015],
    [0.00000002683, 3.77978842246, 6282.83203250789],
    [0.00000002848, 2.09414295555, 11322.42028082089],
    [0.00000002745, 0.21041860525, 5481.4987363511],
    [0.00000002426, 1.24386679781, 6872.91693699471],
    [0.00000002262, 5.05423750942, 7860.17557495569],
    [0.00000002431, 2.28515436796, 30110.4094910219],
    [0.00000002218, 4.26312729072, 17277.6507493173],
    [0.00000002955, 3.73004048151, 27511.7116910207],
    [0.000000023, 2.32608220761, 3442.81876244891],
    [0.00000002424, 5.68140966349, 20956.5058750001],
    [0.00000002622, 2.17435265531, 9580.7456243813],
    [0.00000002032, 5.76558577, 20000.2167190295],
    [0.00000002206, 2.03456492963, 537.0483295789],
    [0.0000000201, 5.28017944038, 21202.3375212295],
    [0.00000002471, 4.17654037966, 10846.3131030077],
    [0.00000002315, 0.62235018491, 9573.14444241349],
    [0.00000002188, 4.41129286184, 9967.69771746511],
    [0.00000002278, 2.8211031001, 10110.4365894759],
    [0.00000002278, 3.53119029368, 10316.6221379131],
    [0.00000001808, 2.43291137306, 22779.6810636773],
    [0.00000002244, 0.8721845276, 5507.7970561509],
    [0.00000001796, 4.66992847541, 7063.87756813929],
    [0.00000002118, 1.94080318718, 10459.3610099239],
    [0.00000001908, 4.04072387238, 20809.7114421287],
    [0.00000002093, 5.40951959375, 522.8212355773],
    [0.00000001753, 5.11036210545, 13554.1417903943],
    [0.00000002072, 2.68969610898, 9690.9519456007],
    [0.00000001993, 5.1228961253, 10404.48999483909],
    [0.0000000216, 4.61577108214, 33018.7772947211],
    [0.00000001962, 3.66408601951, 10736.1067817883],
    [0.00000001484, 4.31259578278, 3723.26514143949],
    [0.00000001997, 1.63225621325, 18875.2820522905],
    [0.00000002057, 3.55699495023, 102.84895673509],
    [0.00000002016, 5.26645554222, 37724.9972372317],
    [0.00000001618, 3.30590238659, 7085.1405985987],
    [0.00000001659, 0.00230057752, 20235.36664379391],
    [0.00000001553, 6.13988283072, 14945.5599910379],
    [0.00000001873, 6.21493810839, 30213.5022652405],
    [0.00000001542, 2.45160700066, 6490.0204047715],
    [0.0000000136, 4.22919267004, 10233.1991245943],
    [0.0000000136, 2.12310072374, 10193.85960279471],
    [0.00000001592, 5.43357759705, 10138.7477651272],
    [0.00000001592, 0.91871579673, 10288.3109622618],
    [0.00000001368, 1.28838366385, 18875.76968725751],
    [0.00000001235, 5.36285347606, 20.5315780089],
    [0.00000001485, 0.27770606219, 9160.77334553909],
    [0.00000001516, 3.63976169766, 9146.54625153749],
    [0.00000001233, 1.75819099072, 18073.46112116669],
    [0.0000000156, 5.07643229822, 9897.1374940379],
    [0.0000000156, 1.27586109556, 10529.9212333511],
    [0.00000001179, 4.4435291582, 14919.2616712381],
    [0.00000001213, 6.01696685843, 28521.3365957381],
    [0.00000001182, 4.063583008, 9794.0447198193],
    [0.00000001402, 6.10447020216, 8661.9965060795],
    [0.00000001158, 2.28822825043, 10633.0140075697],
    [0.00000001257, 5.80717617406, 2378.9206560881],
    [0.00000001089, 3.83624431348, 30639.61282114949],
    [0.00000001402, 3.43315827736, 10640.1275545705],
    [0.00000001483, 0.85707928326, 21535.70582703189],
    [0.00000001079, 5.95495431418, 775.2787938405],
    [0.0000000137, 3.04127991943, 9786.9311728185],
    [0.00000001064, 4.03087864361, 16984.2399649401],
    [0.00000001158, 5.90602944547, 3929.96587873609],
    [0.00000000967, 0.02581826777, 640.1411037975],
    [0.00000000995, 5.83778649915, 8662.48414104651],
    [0.00000001305, 6.0377186803, 36948.9869909407],
    [0.00000001191, 2.95662506124, 39264.3131070437],
    [0.0000000101, 5.80804230901, 10007.3438152573],
    [0.0000000101, 0.54425107612, 10419.7149121317],
    [0.0000000095, 2.7983023992, 1109.6223695769],
    [0.00000001221, 3.93109520572, 75.0254160508],
    [0.00000000987, 3.89911553784, 13937.0383226175],
    [0.00000001164, 3.0446859757, 22805.4917485101],
    [0.00000000845, 5.84334943435, 6770.46678376209],
    [0.00000000996, 2.96758372829, 13341.9181287903],
    [0.00000001123, 0.26297644138, 246.0754637129],
    [0.00000001139, 0.86118865103, 2119.00767786191],
    [0.00000001046, 5.02841709583, 31441.92138724031],
    [0.00000000879, 5.42815094849, 15720.5949673949],
    [0.00000000761, 5.58947417459, 7564.58690325449],
    [0.00000000814, 4.4992703787, 9676.7248515991],
    [0.00000000786, 0.51236116044, 11764.5745863425],
    [0.00000000883, 4.72642948961, 25158.8455372489],
    [0.00000000795, 1.85352659217, 10750.33387578991],
    [0.0000000077, 5.3971769989, 7834.3648901229],
    [0.00000000825, 0.49699119244, 191.6920835951],
    [0.00000000696, 1.82641391127, 36147.6536947839],
    [0.00000000941, 5.56301751479, 28520.84896077109],
    [0.00000000787, 4.31922851608, 19890.0103978101],
    [0.00000000788, 4.89324353272, 7994.77225950771],
    [0.00000000624, 1.27682792425, 39794.0040721383],
    [0.00000000609, 0.58636941909, 8624.45646841071],
    [0.00000000836, 0.40176116197, 41655.2069334513],
    [0.00000000744, 0.94447022556, 19904.2374918117],
    [0.00000000689, 3.03363296847, 1066.7392946735],
    [0.00000000803, 1.1763936894, 40879.1966871603],
    [0.00000000692, 5.25875345423, 6770.9544187291],
    [0.00000000585, 0.3135490952, 14143.2514249471],
    [0.00000000678, 1.25286840883, 12592.2062022991],
    [0.00000000573, 0.95211843581, 12592.6938372661],
    [0.0000000067, 2.49987738716, 10239.3400485273],
    [0.00000000655, 0.26769747072, 19366.94534474929],
    [0.00000000626, 5.88947359425, 52176.0501006319],
    [0.00000000548, 2.24703921308, 17777.87244946549],
    [0.00000000709, 4.4740581663, 26735.7014447297],
    [0.00000000531, 1.52107728998, 110.45013870291],
    [0.00000000605, 3.06366115762, 10059.7505532097],
    [0.00000000676, 3.63142919749, 20529.9076841241],
    [0.00000000598, 1.46005524042, 12432.2864678813],
    [0.00000000593, 3.28870937227, 10367.3081741793],
    [0.00000000663, 4.7662828075, 1162.7185218913],
    [0.00000000466, 0.80841803105, 8631.0823804445],
    [0.00000000468, 4.59842473713, 16983.75232997309],
    [0.00000000454, 5.50480764823, 10042.8564930753],
    [0.00000000462, 1.1171628321, 6.86972951729],
    [0.00000000444, 0.84748580654, 10384.2022343137],
    [0.0000000046, 5.40321784334, 11802.6022589783],
    [0.00000000436, 0.28613833283, 9639.18456535971],
    [0.00000000565, 0.99439008608, 8520.87605922509],
    [0.00000000416, 0.15526058452, 10225.2587165305],
    [0.00000000416, 6.19703280926, 10201.80001085851],
    [0.00000000414, 4.7463652567, 10186.7434089277],
    [0.00000000431, 3.30159385303, 8616.85528644289],
    [0.00000000393, 0.85768879239, 3532.3045102949],
    [0.00000000406, 6.06603671083, 10787.8741620293],
    [0.0000000038, 4.93978031772, 19317.43635781211],
    [0.00000000458, 3.28496308708, 2218.51328670329],
    [0.00000000433, 0.59107482876, 19650.8046636145],
    [0.00000000377, 4.10235161087, 149.8070146181],
    [0.0000000039, 1.63992074391, 13936.5506876505],
    [0.0000000036, 4.38429398498, 24150.3238688285],
    [0.00000000359, 2.6900866431, 30831.5487222281],
    [0.00000000501, 2.59817403162, 44809.4063833799],
    [0.00000000409, 3.34267900163, 27197.03787618409],
    [0.00000000354, 1.27226804531, 10323.7356849139],
    [0.00000000354, 5.08002534847, 10103.3230424751],
    [0.00000000428, 1.10028111046, 13656.10430865991],
    [0.00000000467, 3.73227844246, 38.3768531213],
    [0.00000000343, 0.04251143462, 19786.9176235915],
    [0.00000000457, 5.50264719385, 18308.0510495271],
    [0.00000000399, 5.69770325248, 1052.51220067191],
    [0.00000000445, 5.89891356885, 30665.9111409493],
    [0.00000000344, 4.7509310523, 27490.9362955283],
    [0.00000000315, 4.73109393582, 20640.1140053435],
    [0.00000000399, 2.67833209975, 10212.0448909862],
    [0.00000000399, 3.67396129403, 10215.0138364028],
    [0.0000000039, 0.71131374079, 30000.2031698025],
    [0.0000000034, 5.88673417604, 22805.9793834771],
    [0.00000000398, 2.07757082821, 9836.1557557787],
    [0.00000000311, 0.04968618848, 22003.6708173863],
    [0.00000000404, 2.41513448299, 20352.0333113382],
    [0.00000000366, 2.6994734294, 16522.4158985187],
    [0.0000000035, 4.56156653428, 15874.37377787969],
    [0.00000000385, 6.08106804956, 20180.9832636761],
    [0.00000000379, 4.27472269461, 10590.9029716103],
    [0.00000000395, 1.98398365933, 17277.16311435029],
    [0.00000000383, 0.209538718, 35372.1310834599],
    [0.00000000277, 4.73141990633, 10988.5643400515],
    [0.00000000365, 6.13706743141, 10349.1546887045],
    [0.00000000365, 0.21522596237, 10077.90403868451],
    [0.00000000336, 5.4525215777, 220.6564599223],
    [0.00000000313, 0.95373705811, 6309.1303523077],
    [0.00000000276, 4.02007434964, 26709.8907598969],
    [0.00000000283, 3.96353025226, 3904.1551939033],
    [0.00000000271, 2.28569018986, 9745.5643733401],
    [0.00000000321, 2.63356462069, 38734.6221419491],
    [0.00000000327, 1.40582630148, 9359.84534697549],
    [0.00000000264, 3.59015983869, 76.50988875911],
    [0.0000000031, 5.18631223131, 27991.15799567649],
    [0.00000000359, 1.81226579939, 45585.4166296709],
    [0.00000000326, 4.02012440588, 633.0275567967],
    [0.00000000314, 6.11319497702, 20406.0395144131],
    [0.00000000306, 5.83848348668, 2957.9597119601],
    [0.00000000266, 5.66163509794, 8635.69818627969],
    [0.00000000254, 4.06665609388, 10681.49435404891],
    [0.00000000343, 3.07216363987, 8106.4948561521],
    [0.000000003, 2.55692274187, 206.42936592071],
    [0.0000000025, 4.61153598536, 283.6155013817],
    [0.00000000336, 2.25621229669, 23581.0143598341],
    [0.00000000236, 1.26632265704, 10595.9382609507],
    [0.00000000234, 2.24935612012, 19624.9939787817],
    [0.00000000255, 4.35467668425, 213.0552779545],
    [0.00000000281, 5.49571093835, 9399.9790797347],
    [0.00000000314, 2.13931899616, 19786.42998862449],
    [0.00000000229, 0.20297430947, 574.10098085129],
    [0.00000000295, 2.36600819373, 31749.4790082099],
    [0.00000000316, 4.02123996191, 48739.6160795995],
    [0.00000000229, 2.88588042648, 949.4194264533],
    [0.00000000229, 1.53780233055, 19896.63630984389],
    [0.00000000257, 3.32400213893, 19360.3194327155],
    [0.00000000231, 2.8157713722, 9264.35375472471],
    [0.00000000255, 2.46385009073, 9993.1167212557],
    [0.00000000255, 3.88844330305, 10433.9420061333],
    [0.00000000291, 2.32110551482, 9999.7426332895],
    [0.00000000285, 1.0394014936, 34596.1208371689],
    [0.00000000211, 4.89515362389, 10249.55723037191],
    [0.00000000211, 1.45713976989, 10177.5014970171],
    [0.00000000255, 0.85666215039, 11027.07964765431],
    [0.0000000022, 2.13302811409, 37.7838551523],
    [0.0000000028, 2.0966324744, 37410.32342239509],
    [0.00000000258, 3.69928540375, 29573.6049789265],
    [0.00000000247, 0.33730425769, 29587.8320729281],
    [0.00000000206, 1.8039301325, 30426.8013606785],
    [0.00000000263, 1.59050643196, 20433.9284569063],
    [0.00000000212, 1.58965720399, 10206.9008047945],
    [0.00000000212, 4.76263618979, 10220.15792259451],
    [0.00000000202, 5.53871102932, 16894.7542170941],
    [0.00000000272, 3.28012716441, 12320.56387123691],
    [0.00000000211, 3.54449702303, 11162.7049726643],
    [0.00000000197, 2.85538775435, 8734.17515466309],
    [0.00000000267, 2.72934257174, 377.6174253993],
    [0.00000000224, 1.78242794958, 9051.05465928671],
    [0.00000000186, 2.96624941532, 10251.6623993323],
    [0.00000000186, 3.38604397846, 10175.3963280567],
    [0.00000000258, 0.95259841698, 9864.60494324651],
    [0.00000000186, 3.20827310527, 40077.8633910035],
    [0.00000000233, 6.20481595696, 29089.0552334685],
    [0.00000000186, 3.29904519478, 17272.1278250099],
    [0.00000000254, 1.58851500083, 19264.3402054977],
    [0.00000000246, 5.39979351075, 10562.4537841425],
    [0.00000000211, 4.59175138406, 11376.0040681023],
    [0.00000000178, 5.22149503543, 10949.4058772263],
    [0.00000000178, 1.13079835835, 9477.65285016271],
    [0.00000000197, 5.67208275737, 1692.40948698591],
    [0.00000000177, 4.83529684993, 20316.6085886861],
    [0.00000000216, 4.13948146239, 20452.6255947383],
    [0.00000000197, 1.76173397564, 9050.56702431969],
    [0.00000000159, 5.88022204093, 27197.5255111511],
    [0.00000000167, 1.09928566241, 4705.4884900601],
    [0.00000000213, 3.70468670755, 27511.2240560537],
    [0.00000000154, 5.43597579906, 10199.3022696929],
    [0.00000000154, 0.91631759472, 10227.7564576961],
    [0.00000000174, 0.32803080161, 14.47091148511],
    [0.00000000209, 3.23046462275, 10063.4785315929],
    [0.00000000167, 5.14638326738, 6872.42930202769],
    [0.00000000185, 2.25428901814, 9256.75257275689],
    [0.00000000166, 2.18082507791, 10263.2863891663],
    [0.00000000166, 4.17146831587, 10163.7723382227],
    [0.00000000168, 0.62423658392, 7991.18509413049],
    [0.00000000174, 2.197585019, 9161.2609805061],
    [0.00000000197, 1.87142263401, 846.3266522347],
    [0.00000000176, 6.26295125412, 9779.32999085069],
    [0.00000000198, 5.45633204029, 52669.8257758191],
    [0.00000000169, 4.14838568997, 11265.7977468829],
    [0.00000000188, 2.47639831966, 38526.3305333885],
    [0.0000000014, 5.67905778675, 27991.6456306435],
    [0.00000000194, 3.83921848765, 8837.26792888169],
    [0.00000000173, 2.87742322736, 9793.5570848523],
    [0.0000000014, 5.04268037408, 10191.6785343681],
    [0.0000000014, 1.3096130197, 10235.3801930209],
    [0.00000000196, 3.84465359273, 1293.24040609909],
    [0.0000000018, 5.9533259572, 10021.5934626159],
    [0.00000000138, 5.09734035169, 10217.4615169576],
    [0.00000000138, 1.25495304209, 10209.5972104314],
    [0.00000000148, 0.74425859729, 19374.5465267171],
    [0.00000000137, 2.37981976955, 16522.9035334857],
    [0.00000000143, 6.11571774821, 20447.5903053979],
    [0.00000000139, 1.01385118035, 7255.3258342509],
    [0.00000000126, 2.24994178665, 20277.2517127709],
    [0.00000000164, 3.22032043024, 49515.6263258905],
    [0.00000000149, 0.61484998961, 10135.8555932665],
    [0.00000000149, 5.73744340417, 10291.20313412251],
    [0.00000000118, 2.69846631523, 4551.7096795753],
    [0.00000000117, 5.64919068623, 1582.2031657665],
    [0.00000000151, 5.5548063321, 10246.0619144859],
    [0.00000000151, 0.79748706168, 10180.99681290311],
    [0.00000000152, 1.61196584184, 39302.3407796795],
    [0.00000000144, 2.25615309488, 9986.0532309055],
    [0.00000000144, 4.0961402989, 10441.00549648351],
    [0.00000000136, 0.51140220699, 17469.0990154289],
    [0.00000000119, 4.90022973272, 20809.2238071617],
    [0.0000000013, 4.00092308815, 10236.3045651453],
    [0.0000000013, 2.35137030563, 10190.7541622437],
    [0.00000000156, 2.62001496107, 20388.6818742677],
    [0.00000000132, 3.92998867218, 9580.2579894143],
    [0.00000000155, 5.57179178709, 8238.0368178385],
    [0.00000000142, 5.15510279625, 31441.4337522733],
    [0.00000000131, 0.68390506026, 8101.39141534989],
    [0.00000000133, 5.5762720973, 24382.8352909579],
    [0.00000000105, 5.80156791329, 32858.36992533629],
    [0.00000000105, 5.39190347848, 1059.1381127057],
    [0.00000000101, 2.78278015558, 24978.7684069643],
    [0.00000000126, 3.33415820026, 22645.57201409229],
    [0.00000000101, 3.69358080572, 20043.9183776823],
    [0.0000000011, 4.54705018597, 43071.65547154729],
    [0.00000000103, 2.03520456299, 12431.79883291429],
    [0.00000000136, 4.50608056956, 5999.4603486097],
    [0.00000000097, 5.63294739362, 853.4401992355],
    [0.0000000013, 1.64701005433, 4176.2851599325],
    [0.00000000113, 2.36571271909, 19794.0311705923],
    [0.00000000093, 0.77688953992, 22645.08437912529],
    [0.00000000124, 3.90067857109, 42456.5402296081],
    [0.00000000107, 5.87195741297, 3.6883357796],
    [0.00000000127, 1.97874545982, 284.1031363487],
    [0.00000000112, 0.89977181729, 20206.4022674667],
    [0.00000000097, 2.64537814089, 78263.95324220609],
    [0.00000000093, 1.8042934764, 8204.4841895685],
    [0.00000000127, 0.59683711488, 56600.0354720387],
    [0.00000000111, 6.25613029204, 18830.14083265389],
    [0.00000000098, 1.55452229557, 11059.6121984457],
    [0.00000000098, 4.79806616663, 9367.4465289433],
    [0.00000000103, 3.58160703323, 10244.4434893295],
    [0.00000000103, 2.77068636055, 10182.6152380595],
    [0.00000000111, 2.87167506517, 18844.36792665549],
    [0.00000000125, 0.78050482769, 12189.0219095505],
    [0.00000000088, 2.76213355426, 20350.5488386299],
    [0.00000000088, 0.8652370622, 29058.1411078335],
    [0.00000000096, 2.34258805293, 2333.44021035551],
    [0.00000000122, 3.8612713519, 2636.9692901205],
    [0.00000000087, 2.93183519168, 8087.1643213483],
    [0.00000000086, 5.21875976302, 7034.8959381599],
    [0.00000000095, 0.46006492106, 10202.4836634306],
    [0.00000000095, 5.89222847272, 10224.5750639584],
    [0.00000000084, 5.94038512576, 10401.4545114571],
    [0.00000000084, 0.41190826802, 10025.6042159319],
    [0.00000000085, 3.46647958947, 19477.6393009357],
    [0.00000000086, 6.05989445995, 29864.0902098255],
    [0.00000000099, 1.2314371976, 2648.6986429565],
    [0.00000000082, 5.76212222967, 802.0647486073],
    [0.00000000087, 2.17814642225, 13745.10242153889],
    [0.00000000081, 2.16717230933, 1550.8014051645],
    [0.00000000083, 4.6115960395, 25933.8805136059],
    [0.00000000079, 4.57245769213, 44008.0730872231],
    [0.00000000078, 4.54232413366, 9573.6320773805],
    [0.00000000098, 3.80111874017, 20220.6293614683],
    [0.00000000108, 5.23213365332, 24149.8362338615],
    [0.000000001, 3.49984914654, 1596.43025976811],
    [0.00000000095, 1.78056312476, 29477.6257517087],
    [0.00000000078, 4.60961320788, 205.9417309537],
    [0.00000000096, 0.0507479312, 30206.38871823969],
    [0.00000000079, 5.65022966428, 3340.36860921629],
    [0.00000000095, 2.94692116655, 30220.6158122413],
    [0.00000000082, 3.38904287688, 29043.91401383189],
    [0.00000000077, 4.54577063518, 17468.6113804619],
    [0.000000001, 2.86693803454, 38500.5198485557],
    [0.00000000107, 3.08328160895, 2069.2506523901],
    [0.00000000077, 2.01507273057, 10853.4266500085],
    [0.00000000087, 5.94217613191, 5.2791068239],
    [0.00000000076, 3.30386469943, 10243.35080184331],
    [0.00000000076, 3.04842869435, 10183.7079255457],
    [0.00000000076, 4.513381617, 956.53297345411],
    [0.000000001, 1.06850076905, 28947.9347866141],
    [0.00000000096, 0.14778409211, 35371.6434484929],
    [0.00000000073, 1.89720121846, 17248.18148437089],
    [0.00000000073, 0.27810624949, 21001.1597082403],
    [0.00000000081, 0.69044779243, 18734.6492404031],
    [0.00000000076, 3.94914583018, 103.3365917021],
    [0.00000000085, 0.56437212275, 3914.71340755109],
    [0.00000000074, 0.35341059185, 8827.6340873583],
    [0.0000000007, 6.203940494, 6298.57213865991],
    [0.00000000087, 1.33961295133, 33019.2649296881],
    [0.00000000071, 2.38829288593, 34172.1611489279],
    [0.00000000079, 1.08839441675, 10018.5579792339],
    [0.00000000079, 5.26389897703, 10408.5007481551],
    [0.00000000069, 1.34393957743, 33794.2999060451],
    [0.00000000087, 3.11833451886, 29050.53992586569],
    [0.00000000069, 5.61698463903, 41044.8342684391],
    [0.00000000069, 0.68347421356, 9644.7074896671],
    [0.00000000069, 5.66881918022, 10782.3512377219],
    [0.00000000087, 0.75446196555, 28313.0449871775],
    [0.00000000085, 5.34847160578, 46386.7499258277],
    [0.00000000083, 4.22258770909, 9721.86607123571],
    [0.00000000083, 2.12970568469, 10705.1926561533],
    [0.0000000009, 3.61691095667, 20049.4413019897],
    [0.00000000064, 4.2924135456, 9147.03388650451],
    [0.00000000076, 5.76440554422, 21486.1968400947],
    [0.00000000085, 2.91506656251, 19573.13089318649],
    [0.00000000063, 3.18394429045, 18314.67696156089],
    [0.00000000071, 1.43323486518, 1573.57660661529],
    [0.0000000007, 0.75113063455, 1580.6228433133],
    [0.0000000008, 1.55502986811, 39301.8531447125],
    [0.00000000067, 2.05780765354, 3956.2641985359],
    [0.00000000087, 3.90828389301, 29264.3266562707],
    [0.00000000063, 4.94664274045, 27461.46703058189],
    [0.0000000007, 4.18407491369, 1479.11039154791],
    [0.00000000081, 1.62635438826, 10205.92818172669],
    [0.0000000008, 1.81036094537, 38204.44354188749],
    [0.0000000006, 6.06109901775, 20421.2919855981],
    [0.00000000064, 5.87371692529, 18300.44986755929],
    [0.00000000076, 2.3690693568, 29683.81130014589],
    [0.00000000082, 2.02061615739, 60530.2451682583],
    [0.00000000077, 4.62121260267, 53445.8360221101],
    [0.00000000062, 5.9988834418, 11599.4246400307],
    [0.00000000058, 1.51132330725, 7576.8038910575],
    [0.00000000057, 2.10835504837, 11280.0248408845],
    [0.00000000059, 5.97279707503, 10255.0801546793],
    [0.00000000059, 0.37949631875, 10171.9785727097],
    [0.00000000057, 2.49183550585, 20464.84258254131],
    [0.00000000079, 3.54945759635, 10136.7756574519],
    [0.00000000066, 3.91005081121, 14169.5497447469],
    [0.00000000063, 5.25828651967, 18099.7594409665],
    [0.0000000006, 1.6277756584, 29786.9040743645],
    [0.00000000064, 4.00075551038, 30007.3167168033],
    [0.00000000054, 2.10183945809, 30666.3987759163],
    [0.00000000058, 1.48653920785, 75449.7506569799],
    [0.00000000073, 2.27987689949, 51449.5680807617],
    [0.00000000074, 3.91378496364, 21720.2991334881],
    [0.00000000063, 1.10572404909, 26736.1890796967],
    [0.00000000054, 2.34430307252, 38204.9311768545],
    [0.00000000072, 2.90060717525, 100608.3523767453],
    [0.00000000053, 2.23725068823, 419.72846135871],
    [0.00000000052, 0.52183347499, 40426.7878114515],
    [0.00000000052, 1.02206221481, 29580.23089096029],
    [0.00000000053, 2.81130934606, 419.2408263917],
    [0.00000000058, 6.02426265881, 20412.5878159039],
    [0.00000000054, 4.8332205351, 9366.9588939763],
    [0.00000000055, 5.16439912672, 9103.6631766341],
    [0.0000000005, 0.80815973951, 34570.3101523361],
    [0.00000000067, 4.2157406137, 632.5399218297],
    [0.0000000005, 2.75084153641, 37724.5096022647],
    [0.00000000069, 3.30376299828, 53284.94101775829],
    [0.00000000057, 3.46902641065, 8307.5769637871],
    [0.0000000005, 6.26940117566, 8417.7832850065],
    [0.00000000049, 3.48884514281, 26087.65932409069],
    [0.00000000064, 0.45737297425, 7064.3652031063],
    [0.00000000049, 0.14582053812, 14128.4865887291],
    [0.00000000056, 0.66365909742, 28418.2438215195],
    [0.00000000066, 4.48087077585, 19580.7320751543],
    [0.00000000047, 4.50934828666, 10742.73269382209],
    [0.00000000061, 2.99027576045, 43232.0628409321],
    [0.00000000061, 2.99027576045, 43232.5504758991],
    [0.00000000047, 3.24772943759, 38741.7356889499],
    [0.0000000005, 6.05228449513, 59161.1932343711],
    [0.00000000046, 0.66057761892, 18844.8555616225],
    [0.00000000054, 5.40667573437, 48947.9076881601],
    [0.00000000046, 3.06762447182, 3154.9309023791],
    [0.00000000046, 5.78250179315, 194.7275669771],
    [0.00000000056, 5.79105836654, 9936.7835918301],
    [0.00000000056, 0.56123502724, 10490.27513555891],
    [0.00000000054, 2.92585194345, 9922.5564978285],
    [0.00000000054, 3.42644145033, 10504.50222956051],
    [0.00000000059, 3.58503267144, 18204.47064034149],
    [0.00000000048, 5.93973568185, 38727.5085949483],
    [0.00000000057, 0.49036750604, 50316.9596220473],
    [0.00000000061, 4.41585090977, 10140.2322378355],
    [0.00000000061, 1.93644248401, 10286.8264895535],
    [0.00000000061, 5.2841409298, 6567.1789863401],
    [0.00000000048, 1.78116904393, 9246.5584862589],
    [0.0000000006, 4.34124861578, 3684.1342325067],
    [0.0000000006, 1.84622131041, 14427.5983787793],
    [0.00000000051, 3.86708252316, 47623.60896860609],
    [0.00000000051, 0.71903454294, 9566.03089541269],
    [0.00000000052, 1.63231256422, 8727.0616076623],
    [0.00000000057, 2.19171070766, 32243.2546833971],
    [0.00000000048, 0.4832868364, 433.9555553603],
    [0.00000000045, 3.95006454295, 10263.5259855987],
    [0.00000000045, 2.40222885083, 10163.53274179031],
    [0.00000000049, 0.08548300777, 9794.6049647939],
    [0.00000000049, 6.266810386, 10632.45376259511],
    [0.00000000058, 1.48111021336, 1860.95904382949],
    [0.00000000047, 6.22156178529, 20142.9555910403],
    [0.00000000046, 3.81317535217, 2349.5868529063],
    [0.00000000044, 0.47724556879, 30632.98690911569],
    [0.00000000046, 3.13107041429, 2356.63308960431],
    [0.00000000041, 4.8409698114, 12850.2548363315],
    [0.00000000041, 0.14576799491, 8094.7655033161],
    [0.00000000042, 3.5122504309, 77802.6168107517],
    [0.00000000042, 1.24107185058, 25132.5472174491],
    [0.00000000043, 3.94226686, 19359.83179774849],
    [0.0000000004, 5.46575824362, 10192.2663332351],
    [0.00000000042, 1.71742433091, 34363.6094150395],
    [0.00000000039, 5.92169473585, 109.9625037359],
    [0.00000000044, 2.89783948131, 79379.9603531995],
    [0.00000000043, 5.95822352823, 38734.13450698209],
    [0.00000000046, 5.13701973505, 17778.3600844325],
    [0.00000000039, 1.30600974103, 12565.9078824993],
    [0.00000000041, 1.87488507902, 27681.89692667289],
    [0.00000000053, 3.4444898421, 64460.4548644779],
    [0.00000000039, 1.87347006255, 28631.5429169575],
    [0.00000000052, 3.63883543733, 38631.5293677305],
    [0.00000000043, 4.57112425738, 11180.5002411301],
    [0.00000000039, 5.73477931992, 1265.81129610991],
    [0.00000000039, 5.37998455046, 7879.84533585549],
    [0.00000000039, 5.37998455046, 7880.3329708225],
    [0.00000000052, 0.42370802477, 1.7282901918],
    [0.00000000039, 5.18684094963, 54981.6287735731],
    [0.00000000047, 0.18137418769, 187.68133027909],
    [0.00000000044, 5.88330364964, 10168.3881440579],
    [0.00000000044, 0.46898974414, 10258.67058333111],
    [0.00000000048, 3.11428064716, 10063.9661665599],
    [0.00000000043, 0.40920515062, 22029.9691371861],
    [0.00000000051, 4.32233625991, 104538.5620729649],
    [0.00000000051, 4.70514324366, 16250.7735674565],
    [0.00000000037, 2.91614118281, 29161.2338820521],
    [0.00000000043, 3.35259007747, 10363.09256082911],
    [0.00000000038, 2.56509414217, 47917.5073879503],
    [0.00000000049, 6.13351350993, 66037.79840692569],
    [0.00000000037, 2.84218465987, 6257.0213476751],
    [0.00000000036, 1.39948703899, 8674.2134938825],
    [0.00000000045, 3.57903060172, 522.3336006103],
    [0.00000000049, 0.39199067732, 491.9071099423],
    [0.00000000042, 1.38184413529, 115674.52048208468],
    [0.0000000004, 1.35149502784, 10233.8171242199],
    [0.00000000036, 5.98817728846, 47938.2827834427],
    [0.00000000035, 1.18237114499, 12546.72575656651],
    [0.00000000048, 1.34137746528, 90395.0668305343],
    [0.0000000004, 4.18858105636, 14127.99895376209],
    [0.00000000044, 2.73569081007, 9698.0654926015],
    [0.00000000044, 3.61660258371, 10728.99323478751],
    [0.00000000036, 0.66588479818, 69942.1974183125],
    [0.00000000035, 4.16647411013, 41654.71929848429],
    [0.00000000034, 2.69446692279, 55798.7021758819],
    [0.00000000037, 1.68139810641, 35192.0539531753],
    [0.00000000046, 1.33857194026, 36301.4325052687],
    [0.00000000047, 6.19310388781, 86464.85713431469],
    [0.00000000035, 0.7357409661, 48732.98752069949],
    [0.00000000035, 3.22135299939, 10011.2759685204],
    [0.00000000035, 3.13094039439, 10415.78275886861],
    [0.00000000034, 4.60818788188, 37410.8110573621],
    [0.00000000033, 3.80929053875, 49477.59865325469],
    [0.00000000042, 2.82864954668, 18830.6284676209],
    [0.00000000035, 0.56308161765, 49515.1386909235],
    [0.00000000047, 2.22431731848, 31022.50935337269],
    [0.00000000034, 3.32920660018, 100909.28143881488],
    [0.00000000033, 2.17810098111, 10117.5501364767],
    [0.00000000033, 4.17419241267, 10309.5085909123],
    [0.00000000034, 0.22454658153, 7461.49412903589],
    [0.00000000034, 5.44249373293, 45584.9289947039],
    [0.00000000032, 1.67235375803, 9676.23721663209],
    [0.00000000039, 1.15429612014, 316.6356871401],
    [0.00000000033, 6.02812295236, 31748.99137324289],
    [0.00000000031, 1.87708120179, 30103.29594402109],
    [0.00000000035, 5.77132581087, 58946.27306691049],
    [0.00000000032, 2.19359308367, 21977.8601325535],
    [0.00000000036, 5.94106521859, 20430.7470631686],
    [0.00000000032, 4.93495818843, 81732.8265069713],
    [0.0000000003, 0.70932860715, 19573.6185281535],
    [0.00000000031, 0.91919649284, 11.2895177474],
    [0.00000000038, 0.23287825442, 20617.77554105009],
    [0.00000000033, 4.31035022066, 83310.1700494191],
    [0.00000000029, 4.95280669313, 11752.8452335065],
    [0.00000000029, 3.94608385223, 9801.1582668201],
    [0.00000000029, 2.40620954155, 10625.9004605689],
    [0.0000000003, 2.05100908229, 20432.3378342129],
    [0.00000000031, 3.37186993722, 7255.8134692179],
    [0.00000000029, 5.98151124473, 9889.53631207009],
    [0.00000000029, 0.20516018454, 224.5886131854],
    [0.00000000028, 4.98574596975, 10099.09007500929],
    [0.00000000028, 1.36654742403, 10327.96865237972],
    [0.00000000037, 1.58092203649, 47964.0934682755],
    [0.00000000029, 3.50171158414, 10426.3408241655],
    [0.00000000034, 2.65907611892, 1539.5596872955],
    [0.00000000039, 3.6185641189, 30563.8343848409],
    [0.00000000039, 2.90348082239, 5791.16874004909],
    [0.00000000028, 0.72410945645, 1178.9507215561],
    [0.00000000031, 3.89571253711, 39786.8905251375],
    [0.00000000028, 2.08869873285, 73872.40711453209],
    [0.00000000027, 2.10097762457, 9411.22079760369],
    [0.00000000028, 5.13153492293, 15694.7842825621],
    [0.00000000034, 2.10776670451, 40213.4887160135],
    [0.00000000037, 2.87146864607, 36949.4746259077],
    [0.00000000035, 1.99221623651, 37704.2218417393],
    [0.00000000028, 4.41249255504, 4732.2744448269],
    [0.00000000037, 1.06810151543, 13859.8797410489],
    [0.00000000035, 4.29368361875, 18093.13088206649],
    [0.00000000035, 4.29368361875, 18093.6185170335],
    [0.00000000031, 1.42888574956, 42430.7295447753],
    [0.00000000026, 2.52843792658, 8734.6627896301],
    [0.00000000028, 3.49562374283, 7886.4738947555],
    [0.00000000031, 1.84284071261, 25960.1788334057],
];

const Y1: &[Term] = &[
    [0.00051880979, 0.71095646371, 0.2438174835],
    [0.0001726082, 5.63797390819, 20426.8149099055],
    [0.00011049864, 3.60540297803, 10213.0417287275],
    [0.00004831725, 3.20542321593, 10213.5293636945],
    [0.00000175352, 0.23521252264, 30640.1004561165],
    [0.00000060293, 3.35720999584, 8636.18582124671],
    [0.00000062982, 0.52034329307, 10187.2310438947],
    [0.00000062707, 5.83097900617, 10239.8276834943],
    [0.00000049342, 3.00369011281, 11790.8729061423],
    [0.00000036826, 0.49986531697, 775.7664288075],
    [0.00000039689, 4.87663392982, 20426.32727493849],
    [0.00000030101, 3.75628445251, 10022.0810975829],
    [0.0000002933, 2.5946227684, 10404.9776298061],
    [0.0000001999, 5.87132108056, 9438.0067523705],
    [0.00000017877, 0.50656677315, 10989.0519750185],
    [0.00000014175, 2.13477380875, 9683.8383985999],
    [0.00000013388, 2.9092409245, 191.2044486281],
    [0.00000013513, 4.20262757897, 10743.2203287891],
    [0.00000014034, 1.92852680423, 4705.9761250271],
    [0.00000013385, 5.8625248905, 19651.2922985815],
    [0.00000006873, 3.26551570952, 9104.1508116011],
    [0.00000007547, 4.00471700687, 1059.6257476727],
    [0.00000007388, 4.42957705498, 15721.0826023619],
    [0.00000005971, 3.08667185392, 11322.9079157879],
    [0.00000005966, 5.81970120815, 10220.6429106953],
    [0.00000005965, 0.53310334979, 10206.4158166937],
    [0.00000005155, 4.0669148718, 3154.4432674121],
    [0.00000004571, 3.01985951758, 20618.2631760171],
    [0.00000004246, 4.48337967211, 10000.23026825651],
    [0.00000004157, 1.8690201605, 10426.8284591325],
    [0.00000004649, 1.29491136363, 9830.6328314713],
    [0.00000004431, 5.05738488158, 10596.4258959177],
    [0.00000003938, 5.07016509425, 7.3573644843],
    [0.00000003399, 0.82461824896, 7860.6632099227],
    [0.00000002758, 2.34021605546, 19367.4329797163],
    [0.00000002699, 5.36901161259, 7058.8422787989],
    [0.00000002515, 0.93953422896, 8623.96883344369],
    [0.00000002725, 0.25399973919, 801.5771136403],
    [0.00000002539, 4.39873985192, 9411.7084325707],
    [0.00000001822, 4.89709335392, 1109.1347346099],
    [0.000000023, 1.94517236646, 11015.3502948183],
    [0.00000001816, 0.95974773242, 13368.2164485901],
    [0.00000001814, 3.28732569612, 3930.4535137031],
    [0.00000001586, 1.12226291927, 40853.3860023275],
    [0.00000001999, 4.09704295416, 26.0545023163],
    [0.00000001745, 0.69413221331, 4552.1973145423],
    [0.00000001503, 5.3523831556, 12566.3955174663],
    [0.00000001446, 5.4874510869, 7084.6529636317],
    [0.000000014, 4.67651135088, 11272.91129388371],
    [0.00000001282, 3.09230484373, 10219.0522880019],
    [0.00000001282, 3.25998855005, 10208.0064393871],
    [0.00000001352, 1.29314419649, 20419.7013629047],
    [0.00000001475, 4.11277346234, 3128.6325825793],
    [0.00000001235, 0.55003403789, 1577.5873599313],
    [0.00000001286, 4.12341945563, 23581.5019948011],
    [0.00000001283, 5.45488591011, 382.6527147397],
    [0.00000001171, 1.71768767831, 9154.1474335053],
    [0.00000001084, 2.78444751991, 10198.2768925095],
    [0.00000001084, 3.56784587387, 10228.78183487951],
    [0.00000001198, 3.38905914109, 16496.6052136859],
    [0.00000000869, 3.97005901207, 2352.6223362883],
    [0.00000001112, 4.99559909082, 1589.3167127673],
    [0.00000000922, 5.66846628682, 15874.8614128467],
    [0.00000000743, 5.39400352278, 28287.2343023447],
    [0.00000000746, 0.58295457724, 3149.4079780717],
    [0.00000000797, 3.5411361134, 426.8420083595],
    [0.00000000625, 1.61452093926, 20400.5165901057],
    [0.00000000615, 4.93517817028, 21536.1934619989],
    [0.00000000832, 0.35357361779, 21228.63584102931],
    [0.00000000656, 0.63035969025, 11014.8626598513],
    [0.00000000586, 0.59640409991, 5661.5758666357],
    [0.00000000648, 0.34210160772, 537.0483295789],
    [0.00000000674, 0.56456739745, 8094.2778683491],
    [0.00000000636, 4.96350573817, 18849.4713674577],
    [0.00000000655, 2.23854746047, 17298.4261448097],
    [0.00000000615, 0.82332897293, 522.8212355773],
    [0.00000000507, 5.26511211265, 20453.1132297053],
    [0.00000000451, 3.55775064489, 32217.4439985643],
    [0.0000000048, 4.03262150754, 529.44714761109],
    [0.00000000439, 5.33608025421, 6282.83203250789],
    [0.00000000439, 1.01049396969, 29051.0275608327],
    [0.0000000041, 3.89856473824, 24357.0246061251],
    [0.00000000452, 5.3329539169, 9146.54625153749],
    [0.00000000417, 3.34912055717, 6681.46867088311],
    [0.00000000434, 4.87041677173, 9160.77334553909],
    [0.00000000364, 1.1450038584, 10640.1275545705],
    [0.00000000363, 5.18731183247, 9786.9311728185],
    [0.00000000428, 5.53178842562, 20809.7114421287],
    [0.0000000044, 0.90299311231, 9690.9519456007],
    [0.0000000044, 5.44930026371, 10736.1067817883],
    [0.00000000372, 5.21504043865, 10251.55703633031],
    [0.00000000372, 1.13725295513, 10175.5016910587],
    [0.00000000319, 5.77038175361, 17277.6507493173],
    [0.00000000427, 1.38502821135, 18837.7420146217],
    [0.00000000319, 1.75892023078, 7860.17557495569],
    [0.00000000303, 5.78500325867, 14765.48286075331],
    [0.00000000351, 0.93732183183, 6490.0204047715],
    [0.00000000287, 1.7053344436, 1577.0997249643],
    [0.00000000318, 2.05196802231, 14945.0723560709],
    [0.00000000297, 5.78070702462, 10233.1991245943],
    [0.00000000297, 0.57158636916, 10193.85960279471],
    [0.00000000372, 4.36086070254, 22004.1584523533],
    [0.00000000311, 2.86660649993, 9683.35076363289],
    [0.00000000284, 0.7894618456, 3442.81876244891],
    [0.00000000269, 2.73302271647, 9573.14444241349],
    [0.00000000262, 1.65344694622, 21202.3375212295],
    [0.00000000285, 2.9959346496, 13745.5900565059],
    [0.00000000276, 6.13791366947, 9676.7248515991],
    [0.00000000289, 4.21532854719, 20235.36664379391],
    [0.00000000263, 4.06023282629, 22779.6810636773],
    [0.0000000028, 3.52465276935, 14919.2616712381],
    [0.00000000262, 0.23413334905, 10750.33387578991],
    [0.00000000256, 2.84423020029, 10234.3047591869],
    [0.00000000239, 3.17649373533, 5507.7970561509],
    [0.00000000253, 3.50443427097, 10192.7539682021],
    [0.00000000268, 5.5279562785, 27511.7116910207],
    [0.00000000282, 1.52617460595, 4731.7868098599],
    [0.00000000232, 5.814779293, 3723.26514143949],
    [0.00000000285, 3.95599071883, 20956.5058750001],
    [0.00000000244, 2.32200831696, 2353.1099712553],
    [0.00000000272, 2.82574902606, 20000.2167190295],
    [0.00000000254, 3.11073677155, 6283.3196674749],
    [0.00000000238, 6.06399121577, 30639.61282114949],
    [0.00000000232, 6.01167584587, 19890.0103978101],
    [0.0000000021, 3.33764904887, 18073.46112116669],
    [0.00000000216, 3.19588337312, 18073.9487561337],
    [0.00000000199, 5.04355472771, 9639.18456535971],
    [0.00000000218, 5.5307426132, 19904.2374918117],
    [0.00000000225, 5.41510051366, 13937.0383226175],
    [0.00000000235, 1.7300377745, 1551.2890401315],
    [0.00000000191, 2.7628787416, 6872.91693699471],
    [0.00000000179, 4.84535687472, 30110.4094910219],
    [0.00000000185, 1.30870554546, 10787.8741620293],
    [0.00000000235, 1.24541538744, 1066.7392946735],
    [0.00000000208, 4.04763155841, 10007.3438152573],
    [0.00000000208, 2.30466183537, 10419.7149121317],
    [0.00000000179, 3.50084200533, 18875.2820522905],
    [0.00000000184, 0.09028649493, 9967.69771746511],
    [0.00000000166, 3.49629785102, 18307.56341456009],
    [0.00000000163, 3.38894514289, 10225.2587165305],
    [0.00000000163, 2.96334825089, 10201.80001085851],
    [0.00000000156, 4.49619634182, 10316.6221379131],
    [0.00000000156, 1.85609705196, 10110.4365894759],
    [0.00000000178, 6.26185121103, 10459.3610099239],
    [0.00000000172, 2.7150811965, 14143.7390599141],
    [0.00000000163, 4.90813788389, 8616.85528644289],
    [0.00000000163, 5.91344954982, 6.86972951729],
    [0.00000000157, 3.58488866748, 13554.1417903943],
    [0.00000000152, 3.62017418311, 640.1411037975],
    [0.00000000149, 6.16738885127, 7063.87756813929],
    [0.00000000179, 1.00591554381, 29864.5778447925],
    [0.0000000014, 5.31441141872, 8631.0823804445],
    [0.0000000014, 6.19029890817, 529.9347825781],
    [0.00000000131, 2.4519487683, 9794.0447198193],
    [0.0000000017, 3.49470295745, 9153.6597985383],
    [0.00000000128, 3.89903128812, 10633.0140075697],
    [0.00000000177, 3.03845859741, 5481.4987363511],
    [0.00000000154, 5.69369789989, 2119.00767786191],
    [0.00000000131, 5.5667442284, 16984.2399649401],
    [0.00000000131, 4.35512447481, 9437.5191174035],
    [0.00000000118, 1.90850049529, 11790.3852711753],
    [0.0000000014, 2.00742093288, 191.6920835951],
    [0.00000000143, 3.32004481323, 7994.77225950771],
    [0.00000000123, 1.23478424338, 213.5429129215],
    [0.00000000111, 2.74887704228, 8661.9965060795],
    [0.00000000121, 0.6421048728, 28521.3365957381],
    [0.00000000119, 3.20586515571, 3929.96587873609],
    [0.00000000106, 4.33742493006, 1109.6223695769],
    [0.00000000099, 3.87128339263, 20.5315780089],
    [0.00000000104, 4.60451231291, 36147.6536947839],
    [0.00000000107, 4.92712251717, 22805.4917485101],
    [0.00000000125, 3.09576538097, 12432.2864678813],
    [0.00000000101, 1.57214857483, 1052.51220067191],
    [0.00000000093, 1.71903836713, 574.10098085129],
    [0.00000000129, 0.19292287088, 7564.58690325449],
    [0.00000000092, 3.49801814083, 9359.84534697549],
    [0.00000000099, 0.75167027759, 31441.92138724031],
    [0.00000000091, 1.47446366588, 775.2787938405],
    [0.00000000112, 0.41548066865, 10186.7434089277],
    [0.00000000095, 2.09703168525, 10433.9420061333],
    [0.00000000095, 4.25526170853, 9993.1167212557],
    [0.00000000092, 1.92657936145, 14143.2514249471],
    [0.00000000096, 3.75726377834, 220.6564599223],
    [0.00000000084, 1.09570291858, 6770.46678376209],
    [0.00000000088, 3.56094956187, 11322.42028082089],
    [0.0000000011, 5.01502416629, 11802.6022589783],
    [0.00000000108, 3.5632070364, 29580.7185259273],
    [0.00000000093, 4.32241552615, 2957.9597119601],
    [0.00000000101, 0.52107246051, 6770.9544187291],
    [0.00000000105, 3.18747751371, 8662.48414104651],
    [0.00000000094, 6.19217661869, 20433.9284569063],
    [0.00000000089, 3.84885484388, 15720.5949673949],
    [0.00000000088, 4.22623893206, 206.42936592071],
    [0.00000000101, 0.5094763097, 7085.1405985987],
    [0.00000000077, 2.93440992089, 10177.5014970171],
    [0.00000000077, 3.41788347289, 10249.55723037191],
    [0.00000000087, 2.7255314979, 2378.9206560881],
    [0.0000000008, 2.87657638659, 5507.3094211839],
    [0.000000001, 3.31433227306, 14945.5599910379],
    [0.00000000096, 1.34435751761, 8624.45646841071],
    [0.00000000071, 5.88504983472, 24150.3238688285],
    [0.00000000089, 4.61897054824, 18875.76968725751],
    [0.00000000071, 4.97846455178, 29043.91401383189],
    [0.00000000075, 4.48442686361, 19897.1239448109],
    [0.00000000068, 2.38966490616, 10384.2022343137],
    [0.00000000068, 3.96262848762, 10042.8564930753],
    [0.00000000077, 5.37168621038, 29573.6049789265],
    [0.00000000073, 4.93040355002, 29587.8320729281],
    [0.00000000063, 4.96682804495, 10239.3400485273],
    [0.00000000086, 5.50379681688, 19650.8046636145],
    [0.00000000086, 5.13181328155, 19360.3194327155],
    [0.00000000061, 5.3733514017, 29058.1411078335],
    [0.00000000081, 3.17506029506, 11764.5745863425],
    [0.00000000066, 0.0924261401, 26735.7014447297],
    [0.00000000075, 5.86155964498, 25934.3681485729],
    [0.00000000067, 5.87156884416, 40077.8633910035],
    [0.00000000059, 0.2409647206, 10988.5643400515],
    [0.00000000077, 5.42249781467, 20213.5158144675],
    [0.00000000077, 1.74322703053, 7834.3648901229],
    [0.00000000057, 2.63908550678, 10404.48999483909],
    [0.00000000057, 6.11425964512, 110.45013870291],
    [0.00000000067, 3.14352797658, 17777.87244946549],
    [0.0000000006, 4.64344417198, 30831.5487222281],
    [0.00000000058, 4.04812917862, 12592.2062022991],
    [0.00000000054, 3.33029969221, 19317.43635781211],
    [0.00000000065, 1.59839937239, 25158.8455372489],
    [0.00000000064, 0.6381428793, 18308.0510495271],
    [0.00000000059, 1.67190949806, 9779.32999085069],
    [0.00000000053, 6.2317323411, 27490.9362955283],
    [0.0000000005, 0.18460290148, 10103.3230424751],
    [0.0000000005, 6.1676904923, 10323.7356849139],
    [0.0000000005, 4.63939060613, 39794.0040721383],
    [0.00000000055, 1.1877030216, 9793.5570848523],
    [0.00000000048, 2.66058888107, 29089.0552334685],
    [0.00000000051, 5.30933109582, 26709.8907598969],
    [0.00000000047, 5.42237264786, 16522.4158985187],
    [0.0000000006, 4.61502027021, 12592.6938372661],
    [0.00000000057, 4.83119299148, 2218.51328670329],
    [0.00000000047, 2.05343620014, 20640.1140053435],
    [0.00000000046, 2.74639353796, 19786.9176235915],
    [0.00000000047, 4.18909923765, 57836.89451481709],
    [0.00000000045, 2.36837617101, 3532.3045102949],
    [0.00000000047, 1.59938927555, 22003.6708173863],
    [0.00000000045, 2.81454147982, 30000.2031698025],
    [0.00000000043, 3.56791888552, 29786.9040743645],
    [0.00000000051, 0.93432433798, 44008.0730872231],
    [0.00000000042, 6.21590796001, 9999.7426332895],
    [0.0000000005, 0.51812370768, 23581.0143598341],
    [0.00000000051, 6.00715809832, 13341.9181287903],
    [0.0000000004, 3.99083942383, 33019.2649296881],
    [0.00000000051, 5.84065090063, 13656.10430865991],
    [0.00000000048, 1.01747986844, 213.0552779545],
    [0.00000000039, 4.20765456607, 20447.5903053979],
    [0.00000000039, 2.75710568559, 10595.9382609507],
    [0.00000000042, 1.52233926028, 30665.9111409493],
    [0.00000000042, 2.07548691715, 3914.71340755109],
    [0.00000000042, 3.20676468713, 38204.9311768545],
    [0.00000000041, 2.02945904881, 17469.0990154289],
    [0.00000000036, 4.38221463656, 10077.90403868451],
    [0.00000000036, 1.97007875722, 10349.1546887045],
    [0.0000000004, 1.65514953516, 18830.14083265389],
    [0.00000000039, 1.16926464863, 18844.36792665549],
    [0.00000000034, 1.79297258774, 21001.1597082403],
    [0.00000000034, 3.14405588009, 13936.5506876505],
    [0.00000000032, 5.34063867594, 36949.4746259077],
    [0.00000000033, 6.10548742756, 16983.75232997309],
    [0.0000000004, 2.31586332501, 47938.2827834427],
    [0.00000000032, 0.75258375907, 39301.8531447125],
    [0.00000000032, 3.89417641266, 39302.3407796795],
    [0.00000000036, 4.85111863254, 19374.5465267171],
    [0.00000000032, 3.92861114802, 16894.7542170941],
    [0.00000000042, 5.08245275253, 55798.7021758819],
    [0.00000000031, 1.94569247568, 20043.9183776823],
    [0.00000000033, 6.15578410865, 48418.21672306549],
    [0.00000000031, 5.9550993493, 9573.6320773805],
    [0.00000000034, 0.5595260606, 54247.1693182669],
    [0.00000000032, 0.55000852758, 10191.6785343681],
    [0.00000000032, 5.8022848662, 10235.3801930209],
    [0.00000000031, 4.45781570376, 8087.1643213483],
    [0.00000000032, 3.01069170124, 19896.63630984389],
    [0.00000000036, 2.43177228108, 7255.3258342509],
    [0.0000000003, 0.3958232908, 10853.4266500085],
    [0.00000000037, 1.97789587606, 27511.2240560537],
    [0.00000000032, 5.51602815822, 19366.94534474929],
    [0.00000000029, 3.64083349524, 10291.20313412251],
    [0.00000000029, 2.71145989854, 10135.8555932665],
    [0.00000000028, 4.16989797155, 104351.8563837803],
    [0.00000000032, 2.5950295912, 20206.4022674667],
    [0.00000000029, 1.3316061283, 29864.0902098255],
    [0.00000000029, 5.27506731832, 49515.1386909235],
    [0.00000000027, 0.49570343491, 5661.0882316687],
    [0.00000000034, 0.56834994987, 9161.2609805061],
    [0.00000000027, 3.93043638128, 6872.42930202769],
    [0.00000000032, 3.80176203654, 9836.1557557787],
    [0.00000000032, 2.55053135724, 10590.9029716103],
    [0.00000000027, 4.68213678931, 6298.57213865991],
    [0.00000000035, 3.77990327166, 9986.0532309055],
    [0.00000000035, 2.57239012212, 10441.00549648351],
    [0.00000000033, 3.63785377361, 31441.4337522733],
    [0.00000000026, 0.42189641581, 40879.6843221273],
    [0.00000000034, 4.43221326186, 1059.1381127057],
    [0.00000000028, 4.84223047836, 27197.03787618409],
    [0.00000000026, 3.20524473117, 34363.6094150395],
    [0.00000000032, 5.77908535567, 11265.7977468829],
    [0.00000000029, 1.74100180776, 30206.38871823969],
    [0.00000000032, 3.71439292372, 51868.4924796623],
    [0.00000000029, 5.18039950515, 35371.6434484929],
    [0.00000000029, 2.03880685156, 35372.1310834599],
    [0.00000000027, 2.96900241192, 34596.1208371689],
    [0.00000000033, 0.22008313011, 59728.91187210151],
    [0.00000000029, 2.13149426586, 20220.6293614683],
    [0.00000000025, 0.00480216002, 25933.8805136059],
    [0.00000000024, 1.14435429192, 8734.17515466309],
    [0.00000000027, 0.93366720196, 66813.80865321669],
    [0.00000000024, 2.78431824704, 36173.4643796167],
    [0.00000000024, 2.85202782937, 31022.9969883397],
    [0.00000000023, 1.83521592175, 24382.8352909579],
    [0.00000000028, 2.59038076535, 27461.46703058189],
    [0.00000000027, 1.25678130892, 30220.6158122413],
    [0.00000000023, 1.14068817117, 10367.3081741793],
    [0.00000000023, 5.21160522261, 10059.7505532097],
    [0.00000000023, 0.4311750395, 20452.6255947383],
    [0.00000000026, 1.22669168244, 39271.4266540445],
    [0.00000000026, 1.70917344642, 39257.1995600429],
    [0.00000000022, 2.21618655385, 43232.0628409321],
    [0.00000000022, 5.35777920744, 43232.5504758991],
    [0.00000000026, 5.25456910654, 8101.39141534989],
    [0.00000000022, 1.35771340076, 24978.7684069643],
    [0.00000000022, 4.1145851405, 25158.3579022819],
    [0.0000000003, 5.92769527498, 17248.18148437089],
    [0.00000000022, 5.97215448902, 27991.15799567649],
    [0.00000000022, 0.18339928832, 30426.8013606785],
    [0.00000000022, 4.03960220837, 802.0647486073],
    [0.00000000028, 0.58380772945, 17297.9385098427],
    [0.00000000021, 5.72756462954, 9147.03388650451],
    [0.00000000024, 0.86019134061, 46386.7499258277],
    [0.00000000021, 1.15272291675, 27197.5255111511],
    [0.00000000021, 1.79721426538, 44809.8940183469],
    [0.00000000024, 4.3293544707, 52176.0501006319],
    [0.00000000025, 2.80978996759, 22805.9793834771],
    [0.00000000022, 2.50649207464, 9566.03089541269],
    [0.00000000023, 4.04266888662, 6309.1303523077],
    [0.00000000021, 0.48695657465, 10949.4058772263],
    [0.00000000021, 5.86533681913, 9477.65285016271],
    [0.00000000024, 5.27936669763, 10288.3109622618],
    [0.00000000024, 1.07292669615, 10138.7477651272],
    [0.00000000027, 2.1191147324, 9580.2579894143],
    [0.0000000002, 1.17564252576, 8635.69818627969],
    [0.0000000002, 0.64178978255, 11280.0248408845],
    [0.00000000021, 5.31872372185, 3531.81687532789],
    [0.00000000022, 5.81710713116, 62883.5989569971],
    [0.0000000002, 6.04322502436, 17468.6113804619],
    [0.00000000023, 1.10446661612, 10263.2863891663],
    [0.00000000023, 5.24782677766, 10163.7723382227],
    [0.00000000027, 5.92344983854, 32216.95636359729],
    [0.00000000021, 4.91435357755, 47624.0966035731],
    [0.00000000023, 6.01318073085, 55022.6919295909],
    [0.00000000021, 1.20080376991, 18300.44986755929],
    [0.00000000026, 1.64245342007, 63659.1215683211],
    [0.00000000021, 2.86380051865, 43071.65547154729],
    [0.00000000019, 0.23803378346, 20316.6085886861],
    [0.00000000027, 4.48319230296, 28286.74666737769],
    [0.0000000002, 5.63440295344, 62081.7780258733],
    [0.00000000021, 2.14440776384, 24341.7721349401],
    [0.0000000002, 1.13738779403, 49477.59865325469],
    [0.0000000002, 2.35460910589, 70744.0183494363],
    [0.00000000018, 1.66963360809, 14128.4865887291],
    [0.00000000022, 0.39682892264, 27991.6456306435],
    [0.00000000018, 0.69318171155, 9050.56702431969],
    [0.00000000018, 2.78635204608, 4705.4884900601],
    [0.00000000017, 3.20253456324, 28313.0449871775],
    [0.00000000017, 2.89862116564, 10497.38868255971],
    [0.00000000017, 3.45367222814, 9929.6700448293],
    [0.00000000017, 5.48500145482, 19624.9939787817],
    [0.00000000018, 1.11001496449, 29050.53992586569],
    [0.00000000017, 1.4220047541, 18314.67696156089],
    [0.00000000016, 3.1807289008, 48740.1037145665],
    [0.00000000018, 4.3989073041, 38526.3305333885],
    [0.00000000018, 4.74135169951, 42430.7295447753],
    [0.00000000018, 5.74382556326, 42456.5402296081],
    [0.00000000018, 2.58329516885, 33794.2999060451],
    [0.00000000018, 5.72488782244, 33794.7875410121],
    [0.00000000016, 3.86440292184, 9745.5643733401],
    [0.00000000016, 2.48789047194, 10681.49435404891],
    [0.00000000016, 3.34228325637, 38734.6221419491],
    [0.00000000016, 3.55643611626, 47162.2725371517],
    [0.00000000016, 0.41484346267, 47162.7601721187],
    [0.00000000015, 3.83207526863, 10199.3022696929],
    [0.00000000015, 2.52021812515, 10227.7564576961],
    [0.00000000015, 5.97366054337, 41654.71929848429],
    [0.00000000017, 2.28143373849, 50316.9596220473],
    [0.00000000015, 1.13326790706, 53285.4286527253],
    [0.00000000015, 0.77488701815, 66011.98772209289],
    [0.00000000015, 1.26649043492, 38727.5085949483],
    [0.00000000015, 6.23110267766, 46360.9392409949],
    [0.00000000019, 3.03299993077, 67589.3312645407],
    [0.00000000014, 2.92323813617, 21228.1482060623],
    [0.00000000014, 5.08679309387, 40000.1896205755],
    [0.00000000014, 6.23973256044, 11027.07964765431],
    [0.00000000014, 0.11256083334, 9399.9790797347],
    [0.00000000014, 6.10753439498, 37895.6701078509],
    [0.00000000014, 6.16127322322, 37410.8110573621],
    [0.00000000014, 1.37136100611, 50291.1489372145],
    [0.00000000013, 5.74299254495, 12565.9078824993],
    [0.00000000015, 4.65282324499, 21486.1968400947],
    [0.00000000013, 4.57052594573, 52670.3134107861],
];

const Y2: &[Term] = &[
    [0.00039116576, 3.17641452985, 10213.5293636945],
    [0.00001782208, 2.94415914625, 0.2438174835],
    [0.00000953335, 5.20596121245, 10213.0417287275],
    [0.00000818754, 3.60833841869, 20426.8149099055],
    [0.00000012014, 3.98424371923, 30640.1004561165],
    [0.00000008598, 5.19269385475, 10239.8276834943],
    [0.00000008636, 1.10093366611, 10187.2310438947],
    [0.00000003631, 0.41852821424, 20426.32727493849],
    [0.00000002965, 1.54714831387, 8636.18582124671],
    [0.00000003797, 5.44744767135, 9438.0067523705],
    [0.00000003421, 0.82409517159, 10989.0519750185],
    [0.00000002218, 2.12537117132, 10022.0810975829],
    [0.00000002134, 4.12308786769, 10404.9776298061],
    [0.00000002187, 4.57549125366, 11790.8729061423],
    [0.00000001794, 4.97370212204, 775.7664288075],
    [0.00000001421, 0.32903550115, 2353.1099712553],
    [0.00000000972, 4.22805709693, 1577.0997249643],
    [0.00000000682, 0.11738303047, 4705.9761250271],
    [0.00000000658, 3.27522517046, 9683.8383985999],
    [0.00000000715, 6.05529092994, 9830.6328314713],
    [0.00000000683, 0.27418767588, 10596.4258959177],
    [0.00000000568, 1.11272461938, 19651.2922985815],
    [0.00000000544, 4.64774361853, 191.2044486281],
    [0.00000000678, 2.88508832416, 18073.9487561337],
    [0.00000000574, 0.38467340878, 801.5771136403],
    [0.00000000418, 2.74408911585, 10743.2203287891],
    [0.00000000561, 1.75565662404, 6283.3196674749],
    [0.00000000531, 5.68669809373, 7058.8422787989],
    [0.00000000371, 4.29421538467, 9411.7084325707],
    [0.00000000414, 0.59494833209, 529.9347825781],
    [0.00000000287, 1.553439522, 9104.1508116011],
    [0.00000000314, 5.9927684265, 15721.0826023619],
    [0.00000000301, 3.87648034857, 26.0545023163],
    [0.00000000354, 0.58512829013, 13368.2164485901],
    [0.00000000361, 1.45998367037, 14143.7390599141],
    [0.00000000349, 1.12786835203, 22004.1584523533],
    [0.00000000253, 1.92471060417, 1059.6257476727],
    [0.00000000253, 4.53940292522, 11322.9079157879],
    [0.00000000253, 5.88126488763, 3154.4432674121],
    [0.00000000321, 1.94846444699, 11015.3502948183],
    [0.00000000305, 4.22585959217, 3128.6325825793],
    [0.00000000202, 0.1378059063, 10426.8284591325],
    [0.00000000195, 4.45983996443, 20618.2631760171],
    [0.00000000178, 6.05244122419, 10000.23026825651],
    [0.00000000157, 4.6538790743, 40853.3860023275],
    [0.00000000159, 0.72069815424, 382.6527147397],
    [0.00000000177, 0.39338528515, 21228.63584102931],
    [0.00000000126, 1.05687133771, 18849.4713674577],
    [0.00000000131, 5.44244944088, 1577.5873599313],
    [0.00000000148, 5.58098705803, 5507.3094211839],
    [0.00000000139, 2.986860427, 7860.6632099227],
    [0.00000000146, 2.62658040504, 19897.1239448109],
    [0.00000000133, 2.03471349227, 17298.4261448097],
    [0.00000000088, 2.31254159217, 8623.96883344369],
    [0.00000000116, 5.13082226969, 9153.6597985383],
    [0.00000000111, 4.24475286797, 20453.1132297053],
    [0.00000000077, 1.00902400661, 7084.6529636317],
    [0.00000000081, 5.42779981771, 2352.6223362883],
    [0.00000000088, 4.73572405097, 3930.4535137031],
    [0.00000000077, 1.55430183773, 16496.6052136859],
    [0.00000000069, 5.74285388545, 23581.5019948011],
    [0.00000000058, 2.86941970816, 9154.1474335053],
    [0.00000000062, 0.46568901715, 1109.1347346099],
    [0.00000000063, 0.71005704492, 9437.5191174035],
    [0.00000000047, 2.16487309027, 29051.0275608327],
    [0.00000000054, 0.7751049551, 20809.7114421287],
    [0.00000000055, 1.84291935671, 4731.7868098599],
    [0.00000000046, 3.98973988228, 19367.4329797163],
    [0.00000000044, 2.81774994428, 10787.8741620293],
    [0.00000000044, 3.5345434495, 9639.18456535971],
    [0.0000000004, 1.76486455663, 8094.2778683491],
    [0.00000000041, 1.81077528877, 3929.96587873609],
    [0.00000000047, 3.42216864116, 12566.3955174663],
    [0.00000000038, 0.618481219, 6282.83203250789],
    [0.00000000045, 2.64095270339, 25934.3681485729],
    [0.00000000034, 3.37999447267, 28287.2343023447],
    [0.00000000033, 2.41155726835, 11014.8626598513],
    [0.00000000034, 5.75904174875, 14919.2616712381],
    [0.00000000032, 1.85044469509, 24357.0246061251],
    [0.00000000028, 2.26259259006, 20235.36664379391],
    [0.0000000004, 2.04588679924, 29580.7185259273],
    [0.00000000033, 3.78712068425, 4552.1973145423],
    [0.00000000033, 5.68274603993, 6490.0204047715],
    [0.00000000027, 5.51492765662, 10640.1275545705],
    [0.00000000026, 0.80714498512, 9786.9311728185],
    [0.00000000026, 5.24189234984, 3149.4079780717],
    [0.00000000025, 0.52311174916, 10192.7539682021],
    [0.00000000025, 2.69201575821, 10234.3047591869],
    [0.00000000024, 0.09729823382, 21536.1934619989],
    [0.00000000026, 0.29172518031, 14143.2514249471],
    [0.00000000024, 1.53398817563, 18307.56341456009],
    [0.00000000024, 4.66792746343, 5507.7970561509],
    [0.00000000025, 1.99847907794, 18875.2820522905],
    [0.0000000003, 2.25346620875, 20400.5165901057],
    [0.00000000025, 0.91360430606, 27511.7116910207],
    [0.00000000025, 3.28603866404, 8661.9965060795],
    [0.00000000019, 3.72923840682, 11272.91129388371],
    [0.00000000022, 1.87715843315, 30639.61282114949],
    [0.00000000026, 0.865454194, 213.5429129215],
    [0.00000000018, 1.77063553751, 28521.3365957381],
    [0.00000000023, 0.62230384603, 13937.0383226175],
    [0.00000000024, 2.21558567781, 13367.7288136231],
    [0.00000000021, 1.9586904921, 10186.7434089277],
    [0.00000000019, 3.70619728169, 10988.5643400515],
    [0.00000000018, 1.45798324955, 32217.4439985643],
    [0.0000000002, 3.48812478045, 191.6920835951],
    [0.00000000017, 5.71260028354, 15874.8614128467],
    [0.00000000014, 1.56125812418, 21202.3375212295],
    [0.00000000014, 0.92685471122, 17277.6507493173],
    [0.00000000015, 1.6891672396, 18073.46112116669],
    [0.00000000014, 0.06020277571, 10239.3400485273],
    [0.00000000014, 3.96058683099, 14945.0723560709],
    [0.00000000014, 2.61882493594, 8662.48414104651],
    [0.00000000014, 3.66333417023, 11764.5745863425],
    [0.00000000013, 0.36408900148, 34570.3101523361],
    [0.00000000013, 5.32461592855, 22779.6810636773],
    [0.00000000012, 2.28383473867, 31441.92138724031],
    [0.00000000011, 2.70470885221, 10220.6429106953],
    [0.00000000011, 0.50709992859, 10206.4158166937],
    [0.0000000001, 2.04719193722, 7.3573644843],
    [0.0000000001, 3.14863661708, 22003.6708173863],
    [0.00000000012, 1.89856613068, 25158.8455372489],
    [0.00000000009, 1.78868375262, 38500.5198485557],
    [0.0000000001, 4.50140179786, 11790.3852711753],
    [0.00000000012, 3.63812717753, 17297.9385098427],
    [0.00000000008, 4.34372477567, 10404.48999483909],
    [0.00000000009, 3.37718180492, 29089.0552334685],
    [0.00000000007, 0.37788139417, 43232.5504758991],
    [0.00000000007, 4.44321392733, 30000.2031698025],
    [0.00000000009, 6.04652897824, 7860.17557495569],
    [0.00000000009, 0.19167842758, 3531.81687532789],
    [0.00000000007, 3.37107259426, 22805.4917485101],
    [0.00000000007, 2.75239196673, 529.44714761109],
];

const Y3: &[Term] = &[
    [0.00000055518, 0.56397150825, 10213.0417287275],
    [0.00000057047, 4.3085713751, 0.2438174835],
    [0.00000032093, 1.4853286152, 20426.8149099055],
    [0.00000018867, 3.29469305606, 10213.5293636945],
    [0.00000000716, 1.69291337487, 30640.1004561165],
    [0.00000000218, 2.2341693039, 20426.32727493849],
    [0.00000000032, 4.93547527406, 8636.18582124671],
    [0.00000000034, 1.12379373423, 10239.8276834943],
    [0.00000000034, 2.09231646083, 10187.2310438947],
    [0.00000000027, 4.57242516087, 11790.8729061423],
    [0.0000000002, 2.07822937351, 775.7664288075],
    [0.00000000016, 5.32962355701, 10022.0810975829],
    [0.00000000016, 4.16791854245, 10404.9776298061],
    [0.0000000001, 2.19615394659, 40853.3860023275],
    [0.0000000001, 1.2335186816, 9438.0067523705],
    [0.0000000001, 2.08054199257, 10989.0519750185],
    [0.00000000008, 3.70773784399, 9683.8383985999],
    [0.00000000007, 1.33595632185, 191.2044486281],
    [0.00000000007, 5.7753667871, 10743.2203287891],
    [0.00000000008, 3.50194685886, 4705.9761250271],
    [0.00000000007, 1.15263198918, 19651.2922985815],
    [0.00000000004, 4.83876866063, 9104.1508116011],
    [0.00000000004, 5.57864226359, 1059.6257476727],
    [0.00000000004, 6.0028433814, 15721.0826023619],
    [0.00000000003, 4.65996273292, 11322.9079157879],
];

const Y4: &[Term] = &[
    [0.00000083081, 6.18993945631, 10213.5293636945],
    [0.00000002486, 2.28856774293, 10213.0417287275],
    [0.00000000657, 5.78367664587, 20426.8149099055],
    [0.00000000217, 2.03456127835, 0.2438174835],
    [0.00000000035, 5.69795458192, 30640.1004561165],
    [0.00000000011, 4.01388645377, 20426.32727493849],
    [0.00000000005, 0.49844804556, 10239.8276834943],
    [0.00000000005, 2.68999633541, 10187.2310438947],
    [0.00000000003, 3.35675923207, 2353.1099712553],
    [0.00000000002, 3.32525148356, 8636.18582124671],
    [0.00000000002, 1.20160813739, 1577.0997249643],
    [0.00000000002, 0.72866875334, 9438.0067523705],
];

const Y5: &[Term] = &[
    [0.00000000631, 0.0284582818, 10213.5293636945],
    [0.00000000095, 4.11666356042, 10213.0417287275],
    [0.00000000088, 0.15104017272, 0.2438174835],
    [0.0000000004, 4.24049298565, 20426.8149099055],
];

const Z0: &[Term] = &[
    [0.04282990302, 0.26703856476, 10213.285546211],
    [0.00035588343, PI, 0.0],
    [0.00014501879, 1.1469691139, 20426.571092422],
    [0.00000140675, 0.85984113219, 1577.3435424478],
    [0.00000134921, 3.70465787853, 2352.8661537718],
    [0.0000009575, 3.66962547073, 9437.762934887],
    [0.0000007291, 1.5575027824, 9153.9036160218],
    [0.00000073654, 2.0277843478, 30639.856638633],
    [0.00000059714, 6.25390371649, 18073.7049386502],
    [0.00000045307, 2.28075620268, 5507.5532386674],
    [0.00000043023, 3.95620233472, 529.6909650946],
    [0.00000037415, 4.53900359933, 22003.9146348698],
    [0.00000032943, 0.72316171903, 10239.5838660108],
    [0.00000028156, 2.93415727239, 10186.9872264112],
    [0.00000032447, 3.8619625233, 8635.9420037632],
    [0.00000027853, 6.12790511758, 11790.6290886588],
    [0.00000023013, 0.98699428893, 775.522611324],
    [0.00000019425, 5.12759462747, 6283.0758499914],
    [0.00000016289, 2.90852685195, 10988.808157535],
    [0.00000015382, 5.98588709813, 19896.8801273274],
    [0.00000015507, 2.00401259454, 13367.9726311066],
    [0.00000012412, 4.13644030917, 10021.8372800994],
    [0.00000013004, 4.8319549247, 14143.4952424306],
    [0.0000001073, 5.61235409382, 10404.7338123226],
    [0.00000010336, 2.75167531541, 191.4482661116],
    [0.00000010848, 3.29419910254, 11015.1064773348],
    [0.00000009775, 1.21418881204, 8624.2126509272],
    [0.00000010158, 5.71954183827, 9683.5945811164],
    [0.0000000808, 2.69831049093, 19651.048481098],
    [0.00000008209, 3.5537102189, 10742.9765113056],
    [0.00000006416, 0.46264840234, 9786.687355335],
    [0.00000006429, 4.91481073656, 1059.3819301892],
    [0.00000006722, 2.41848486045, 4705.7323075436],
    [0.00000005903, 5.96215831403, 25934.1243310894],
    [0.00000005647, 3.57594715836, 3154.6870848956],
    [0.00000004044, 6.24650537722, 11322.6640983044],
    [0.00000004033, 3.42887820794, 9103.9069941176],
    [0.0000000421, 4.99232132925, 7084.8967811152],
    [0.00000004135, 3.43782832503, 17298.1823273262],
    [0.00000003747, 1.30318722019, 15720.8387848784],
    [0.00000003417, 3.95474989164, 7860.4193924392],
    [0.0000000344, 0.7714027351, 4551.9534970588],
    [0.00000003488, 0.14633368219, 20618.0193585336],
    [0.00000002851, 5.68591706153, 10206.1719992102],
    [0.0000000275, 3.89497095361, 10192.5101507186],
    [0.00000002734, 5.62996472233, 12566.1516999828],
    [0.00000002682, 4.58018033496, 801.8209311238],
    [0.00000002743, 6.06387494803, 10234.0609417034],
    [0.00000002832, 4.2424123322, 213.299095438],
    [0.00000002756, 5.43236957664, 29580.4747084438],
    [0.00000002155, 0.29731467355, 9411.4646150872],
    [0.00000002403, 4.90533210845, 19367.1891622328],
    [0.00000002103, 1.12514771936, 29864.334027309],
    [0.00000001632, 4.67123397256, 1109.3785520934],
    [0.00000001787, 2.52506338741, 15874.6175953632],
    [0.00000001613, 1.47525165805, 7058.5984613154],
    [0.00000001598, 2.2175738925, 10426.584641649],
    [0.00000001154, 1.98818396175, 26.2983197998],
    [0.00000001132, 5.38517603552, 7.1135470008],
    [0.00000001468, 0.75541488791, 9999.986450773],
    [0.00000001118, 0.96571599573, 23581.2581773176],
    [0.0000000121, 3.17717646354, 3532.0606928114],
    [0.00000000965, 0.01161931809, 3128.3887650958],
    [0.00000001027, 2.515926918, 33794.5437235286],
    [0.00000000847, 1.2488870695, 9573.388259897],
    [0.00000000889, 1.48214942791, 9830.3890139878],
    [0.00000000953, 5.73118460251, 20213.271996984],
    [0.00000000987, 4.70495944427, 14945.3161735544],
    [0.0000000103, 0.84929643011, 8094.5216858326],
    [0.0000000077, 4.54196353475, 21228.3920235458],
    [0.00000000778, 1.16378510983, 8662.240323563],
    [0.0000000086, 5.74281955136, 5661.3320491522],
    [0.0000000067, 5.36864204589, 1589.0728952838],
    [0.00000000615, 1.96289781619, 26087.9031415742],
    [0.0000000074, 1.97614280765, 10596.1820784342],
    [0.00000000606, 6.22070159607, 25158.6017197654],
    [0.00000000533, 0.73765107493, 28286.9904848612],
    [0.00000000547, 5.06653964506, 29050.7837433492],
    [0.00000000592, 3.32632513186, 3340.6124266998],
    [0.00000000591, 4.62374022159, 9929.4262273458],
    [0.00000000537, 6.00327539255, 4732.0306273434],
    [0.00000000569, 5.37276655331, 10497.1448650762],
    [0.0000000052, 6.11596800207, 10218.8084705184],
    [0.00000000542, 3.94171539558, 37724.7534197482],
    [0.00000000575, 2.29073875885, 21535.9496445154],
    [0.00000000437, 2.4233039112, 10251.3132188468],
    [0.00000000439, 2.90237828484, 40853.142184844],
    [0.00000000459, 1.69153061401, 3930.2096962196],
    [0.00000000405, 1.42927875873, 9161.0171630226],
    [0.00000000418, 5.48110803243, 32217.2001810808],
    [0.00000000521, 3.84286345199, 10207.7626219036],
    [0.00000000457, 6.16974742379, 10220.3990932118],
    [0.0000000044, 1.25236241968, 10175.2578735752],
    [0.00000000394, 4.81650684498, 9146.790069021],
    [0.00000000362, 0.02259543121, 14765.2390432698],
    [0.00000000396, 4.56209231282, 10063.7223490764],
    [0.00000000407, 6.15731262846, 18875.525869774],
    [0.00000000349, 5.78507522549, 12592.4500197826],
    [0.00000000379, 4.56511543982, 20419.45754542119],
    [0.00000000314, 5.0825905042, 18837.49819713819],
    [0.00000000343, 2.36516734231, 27511.4678735372],
    [0.00000000292, 3.76618455555, 6681.2248533996],
    [0.00000000289, 3.59841384736, 11272.6674764002],
    [0.00000000314, 5.23220905264, 426.598190876],
    [0.00000000301, 4.24971815099, 14919.0178537546],
    [0.00000000322, 1.36846420067, 29088.811415985],
    [0.00000000292, 0.7499751157, 3149.1641605882],
    [0.00000000306, 0.47092243462, 23958.6317852334],
    [0.00000000254, 4.3402657449, 10137.0194749354],
    [0.00000000304, 5.33181632059, 41654.9631159678],
    [0.00000000264, 0.01153452145, 20452.8694122218],
    [0.00000000334, 5.28920083729, 382.8965322232],
    [0.00000000236, 1.03442196051, 22779.4372461938],
    [0.0000000025, 5.05395469123, 24356.7807886416],
    [0.00000000278, 0.10022232617, 16496.3613962024],
    [0.00000000232, 0.48064662619, 17085.9586657222],
    [0.00000000205, 6.19639409918, 7064.1213856228],
    [0.00000000197, 3.7138037724, 1551.045222648],
    [0.000000002, 4.0651677951, 18849.2275499742],
    [0.0000000017, 5.96522395118, 10198.033075026],
    [0.0000000017, 3.52866583267, 10228.538017396],
    [0.0000000018, 0.48168923159, 45585.1728121874],
    [0.00000000144, 2.81280885697, 17277.4069318338],
    [0.00000000177, 3.58248029244, 20400.2727726222],
    [0.0000000017, 3.72282190488, 31441.6775697568],
    [0.00000000166, 0.0356976875, 13745.3462390224],
    [0.00000000127, 5.14389302386, 5481.2549188676],
    [0.00000000138, 1.19253977825, 22805.7355659936],
    [0.00000000126, 4.21594185374, 20956.2620575166],
    [0.00000000118, 1.71706550416, 13341.6743113068],
    [0.00000000131, 0.92317994329, 3442.5749449654],
    [0.00000000137, 2.89407950366, 33019.0211122046],
    [0.00000000104, 2.47347358674, 26709.6469424134],
    [0.00000000127, 0.46833130674, 536.8045120954],
    [0.00000000126, 2.84049662693, 9967.4538999816],
    [0.00000000107, 4.19045394315, 19999.97290154599],
    [0.0000000011, 0.73944778374, 30110.1656735384],
    [0.00000000138, 4.01403107693, 21202.093703746],
    [0.00000000121, 3.85928223786, 522.5774180938],
    [0.00000000122, 0.37000676558, 10459.1171924404],
    [0.00000000095, 5.25435135477, 30213.258447757],
    [0.00000000099, 5.61149803116, 10529.6774158676],
    [0.00000000106, 2.42064996718, 20809.4676246452],
    [0.00000000095, 3.11317801589, 9896.8936765544],
    [0.00000000085, 5.8824806255, 3723.508958923],
    [0.00000000099, 1.93329637732, 49515.382508407],
    [0.00000000084, 4.9374537391, 52175.8062831484],
    [0.00000000086, 0.8575522396, 2379.1644735716],
    [0.00000000114, 5.1130962921, 103.0927742186],
    [0.0000000011, 1.44699918003, 43232.3066584156],
    [0.00000000088, 1.59017183044, 10110.1927719924],
    [0.00000000086, 0.87055324194, 16522.6597160022],
    [0.00000000089, 2.33714216061, 10316.3783204296],
    [0.00000000098, 4.66807552803, 20235.1228263104],
    [0.00000000104, 5.02724740402, 35371.8872659764],
    [0.00000000093, 4.2135614446, 36301.18868778519],
    [0.00000000089, 0.88060757437, 6489.776587288],
    [0.00000000083, 2.07543775594, 31749.2351907264],
    [0.00000000096, 2.90682399304, 9793.8009023358],
    [0.00000000078, 2.65839634325, 10232.95530711079],
    [0.00000000078, 0.55230439694, 10193.61578531121],
    [0.00000000092, 5.63110477712, 10288.0671447783],
    [0.00000000092, 3.86278127025, 10138.5039476437],
    [0.0000000009, 4.34324193073, 36949.2308084242],
    [0.00000000073, 2.56775245907, 13936.794505134],
    [0.00000000071, 0.64943236639, 20.7753954924],
    [0.0000000009, 0.07319663423, 6872.6731195112],
    [0.00000000069, 1.52914774412, 9690.7081281172],
    [0.00000000086, 1.02476175384, 65236.2212932854],
    [0.00000000079, 1.65446145032, 39264.0692895602],
    [0.00000000071, 0.70714638996, 36147.4098773004],
    [0.00000000071, 2.52879760001, 26735.9452622132],
    [0.00000000061, 5.47943297658, 11764.330768859],
    [0.0000000008, 2.87220602049, 47162.5163546352],
    [0.00000000065, 2.53312656681, 10735.8629643048],
    [0.00000000068, 2.28501865578, 8521.1198767086],
    [0.00000000065, 2.12423586627, 28313.288804661],
    [0.00000000062, 2.28587915309, 3903.9113764198],
    [0.00000000069, 0.42270579845, 9580.5018068978],
    [0.00000000063, 5.80076678078, 2118.7638603784],
    [0.00000000056, 4.73821324745, 639.897286314],
    [0.00000000063, 3.35690006984, 53445.5922046266],
    [0.00000000053, 2.14583523296, 8631.326197928],
    [0.00000000066, 4.12244312057, 28521.0927782546],
    [0.00000000058, 5.25045057985, 10419.4710946482],
    [0.00000000058, 4.23724598221, 10007.0999977738],
    [0.00000000053, 3.02375632858, 19317.1925403286],
    [0.00000000071, 2.36609582367, 74.7815985673],
    [0.00000000062, 2.4623906921, 10846.0692855242],
    [0.00000000061, 3.77333230443, 51868.2486621788],
];

const Z1: &[Term] = &[
    [0.00371157532, 1.80370484107, 10213.285546211],
    [0.0000158335, 3.38513432885, 20426.571092422],
    [0.0000021615, 0.0, 0.0],
    [0.00000012186, 5.6052797267, 1577.3435424478],
    [0.00000011953, 4.61859507922, 30639.856638633],
    [0.00000011662, 5.24208633854, 2352.8661537718],
    [0.00000010398, 2.2739399481, 9437.762934887],
    [0.00000006381, 0.28617884662, 9153.9036160218],
    [0.00000005445, 5.0807956504, 10186.9872264112],
    [0.00000004769, 1.50400058537, 11790.6290886588],
    [0.00000005179, 1.5069771614, 18073.7049386502],
    [0.00000003981, 0.75197593763, 5507.5532386674],
    [0.00000003814, 5.5044760719, 529.6909650946],
    [0.00000003372, 3.87807635377, 10239.5838660108],
    [0.0000000284, 1.28497223665, 10404.7338123226],
    [0.0000000322, 6.07567189618, 22003.9146348698],
    [0.00000002336, 4.88957218376, 10988.808157535],
    [0.00000001669, 0.38548673512, 6283.0758499914],
    [0.00000001381, 4.32769653919, 19651.048481098],
    [0.00000001296, 1.2660893243, 19896.8801273274],
    [0.00000001203, 0.38472694833, 13367.9726311066],
    [0.00000001126, 0.08391401839, 14143.4952424306],
    [0.00000000867, 6.12475712244, 7860.4193924392],
    [0.00000000737, 1.3637225453, 9683.5945811164],
    [0.00000000673, 2.25480471785, 10021.8372800994],
    [0.00000000673, 1.74966742013, 11322.6640983044],
    [0.00000000654, 0.52171368417, 8624.2126509272],
    [0.00000000739, 0.71134257549, 8635.9420037632],
    [0.00000000592, 2.89903060772, 15720.8387848784],
    [0.00000000573, 1.68337600461, 20618.0193585336],
    [0.00000000509, 1.21775184841, 25934.1243310894],
    [0.00000000402, 5.1548654432, 9786.687355335],
    [0.00000000522, 3.93344256885, 775.522611324],
    [0.0000000036, 0.93512209325, 1059.3819301892],
    [0.00000000331, 6.1898341776, 11015.1064773348],
    [0.0000000039, 0.5512710259, 19367.1891622328],
    [0.00000000293, 2.4030414045, 801.8209311238],
    [0.00000000311, 5.00264213987, 10742.9765113056],
    [0.00000000303, 1.76024438478, 17298.1823273262],
    [0.00000000266, 2.34165306562, 9411.4646150872],
    [0.00000000336, 2.31707280345, 9999.986450773],
    [0.00000000337, 3.71507493522, 10596.1820784342],
    [0.00000000238, 3.48412611241, 7058.5984613154],
    [0.00000000252, 1.31468836511, 10234.0609417034],
    [0.00000000225, 5.45422332781, 10192.5101507186],
    [0.00000000224, 2.6285387469, 23581.2581773176],
    [0.00000000245, 5.76868176406, 213.299095438],
    [0.0000000024, 4.88817120361, 10206.1719992102],
    [0.0000000021, 2.37015222881, 4551.9534970588],
    [0.00000000198, 0.00551647295, 9830.3890139878],
    [0.00000000235, 0.61645223949, 29580.4747084438],
    [0.0000000019, 5.02902672388, 3930.2096962196],
    [0.00000000219, 4.33456063754, 15874.6175953632],
    [0.00000000171, 3.12200105851, 12566.1516999828],
    [0.00000000174, 5.99537915416, 26.2983197998],
    [0.0000000018, 3.65160439089, 21228.3920235458],
    [0.00000000172, 2.65343695006, 29864.334027309],
    [0.00000000138, 2.09789826211, 3128.3887650958],
    [0.00000000138, 6.13843515618, 9161.0171630226],
    [0.00000000163, 5.40807514906, 4705.7323075436],
    [0.00000000125, 3.63191548504, 7.1135470008],
    [0.00000000146, 1.77971392072, 191.4482661116],
    [0.00000000099, 5.66016472051, 40853.142184844],
    [0.00000000117, 5.44747244034, 10426.584641649],
    [0.00000000095, 1.51959002513, 10218.8084705184],
    [0.00000000101, 4.42330401713, 10220.3990932118],
    [0.000000001, 5.54541542103, 5661.3320491522],
    [0.00000000093, 6.0421772985, 20419.45754542119],
    [0.00000000082, 5.21733543718, 8662.240323563],
    [0.00000000092, 0.17084455774, 9146.790069021],
    [0.00000000085, 4.60308698783, 25158.6017197654],
    [0.0000000009, 5.47130878539, 37724.7534197482],
    [0.00000000074, 1.54547841954, 7084.8967811152],
    [0.00000000087, 3.99154062553, 33794.5437235286],
    [0.00000000091, 0.63814500882, 3154.6870848956],
    [0.00000000065, 3.27192235582, 1109.3785520934],
    [0.00000000089, 1.74739410911, 3532.0606928114],
    [0.00000000069, 1.21744230443, 10198.033075026],
    [0.00000000059, 1.45863866349, 10207.7626219036],
    [0.00000000081, 0.78654424919, 20213.271996984],
    [0.00000000056, 0.16985541402, 14919.0178537546],
    [0.00000000052, 2.57737005542, 22779.4372461938],
    [0.00000000061, 0.72963813902, 382.8965322232],
    [0.00000000052, 3.4920652665, 21535.9496445154],
    [0.00000000062, 3.04943681345, 28286.9904848612],
    [0.00000000056, 2.00173927326, 10228.538017396],
    [0.00000000057, 0.62155717729, 41654.9631159678],
    [0.00000000048, 0.21226498407, 29050.7837433492],
    [0.00000000055, 6.20318924174, 18837.49819713819],
    [0.00000000056, 2.35632004464, 9103.9069941176],
    [0.00000000044, 4.12172817384, 27511.4678735372],
    [0.00000000039, 6.15465517048, 20400.2727726222],
    [0.0000000004, 3.85673830469, 11272.6674764002],
    [0.00000000053, 1.80084365566, 45585.1728121874],
    [0.00000000051, 1.70380845885, 426.598190876],
    [0.0000000004, 5.52599682847, 522.5774180938],
    [0.00000000034, 3.9265947378, 4732.0306273434],
    [0.00000000036, 5.9400607538, 21202.093703746],
    [0.00000000032, 5.31625288376, 3149.1641605882],
    [0.00000000039, 1.26146315948, 32217.2001810808],
    [0.00000000032, 5.0376945981, 536.8045120954],
    [0.00000000034, 4.19685270992, 13341.6743113068],
    [0.00000000031, 1.20392434392, 12592.4500197826],
    [0.00000000036, 3.22618486892, 49515.382508407],
    [0.00000000031, 6.15462442323, 29088.811415985],
    [0.00000000029, 0.47911260035, 1589.0728952838],
    [0.00000000027, 1.23709297168, 33019.0211122046],
    [0.00000000022, 3.33096598037, 20452.8694122218],
    [0.00000000028, 0.89703139186, 8094.5216858326],
    [0.00000000027, 4.63672266528, 3340.6124266998],
    [0.00000000024, 5.94541303751, 9929.4262273458],
    [0.00000000024, 0.40689057274, 10497.1448650762],
    [0.00000000017, 2.88410168794, 16496.3613962024],
    [0.00000000017, 2.59067946967, 10175.2578735752],
    [0.00000000017, 3.76162101633, 10251.3132188468],
    [0.00000000013, 0.74065551442, 24356.7807886416],
    [0.00000000014, 5.04938942644, 6681.2248533996],
];

const Z2: &[Term] = &[
    [0.00016179656, 3.38519723238, 10213.285546211],
    [0.00000305549, 0.0, 0.0],
    [0.00000062577, 5.25189799706, 20426.571092422],
    [0.0000000085, 0.09737945971, 10186.9872264112],
    [0.00000000592, 0.95308466065, 30639.856638633],
    [0.00000000573, 0.56552197979, 2352.8661537718],
    [0.00000000569, 4.36593284769, 10239.5838660108],
    [0.00000000438, 3.1838472832, 11790.6290886588],
    [0.00000000468, 4.01105575472, 1577.3435424478],
    [0.00000000356, 6.12814990238, 10988.808157535],
    [0.00000000324, 2.79347039249, 10404.7338123226],
    [0.00000000277, 6.08171605083, 9437.762934887],
    [0.00000000281, 5.10638363837, 9153.9036160218],
    [0.00000000208, 3.14696384347, 18073.7049386502],
    [0.00000000167, 0.7047648623, 529.6909650946],
    [0.00000000135, 6.00194499808, 19651.048481098],
    [0.00000000145, 5.4177660923, 5507.5532386674],
    [0.00000000117, 2.16955801658, 6283.0758499914],
    [0.00000000121, 1.25671231625, 22003.9146348698],
    [0.00000000118, 2.56442724367, 9683.5945811164],
    [0.00000000074, 4.57489383229, 15720.8387848784],
    [0.00000000083, 5.29424644857, 13367.9726311066],
    [0.00000000059, 3.28182139103, 11322.6640983044],
    [0.00000000064, 5.23563988056, 10596.1820784342],
    [0.0000000006, 2.73672115191, 19896.8801273274],
    [0.00000000047, 4.80208170598, 7058.5984613154],
    [0.00000000042, 2.3698039029, 14143.4952424306],
    [0.00000000041, 1.68366169373, 801.8209311238],
    [0.00000000032, 0.58444963462, 10206.1719992102],
    [0.00000000035, 3.21932079821, 20618.0193585336],
    [0.00000000028, 4.55053233088, 9999.986450773],
    [0.00000000028, 5.84340580032, 10220.3990932118],
    [0.00000000029, 3.13488740448, 9411.4646150872],
    [0.00000000024, 4.5626278213, 10742.9765113056],
    [0.00000000025, 0.54239218952, 11015.1064773348],
    [0.0000000002, 4.832542403, 9830.3890139878],
    [0.00000000025, 1.23260224812, 10021.8372800994],
    [0.00000000019, 5.15537838399, 26.2983197998],
    [0.00000000022, 2.31119555973, 18849.2275499742],
    [0.00000000021, 5.31579555879, 775.522611324],
    [0.0000000002, 2.90919452314, 3128.3887650958],
    [0.00000000023, 2.08236048283, 8635.9420037632],
    [0.00000000014, 3.33582216202, 1059.3819301892],
    [0.00000000009, 3.25236762648, 9103.9069941176],
    [0.00000000009, 0.70904281096, 7860.4193924392],
    [0.0000000001, 2.2122431359, 19367.1891622328],
    [0.00000000009, 5.04826725887, 7.1135470008],
    [0.00000000007, 4.9813806749, 10426.584641649],
    [0.00000000007, 4.31777952738, 3154.6870848956],
];

const Z3: &[Term] = &[
    [0.00000467466, 4.99201374907, 10213.285546211],
    [0.00000021639, PI, 0.0],
    [0.00000002002, 0.76147646688, 20426.571092422],
    [0.00000000057, 1.51447613604, 10186.9872264112],
    [0.00000000042, 5.7073117655, 10239.5838660108],
    [0.0000000002, 4.71416496562, 11790.6290886588],
    [0.00000000019, 5.61164867192, 9437.762934887],
    [0.00000000018, 1.02002338896, 10988.808157535],
    [0.00000000018, 2.08106024829, 2352.8661537718],
    [0.00000000008, 4.33056892256, 10404.7338123226],
    [0.00000000007, 3.07196293928, 30639.856638633],
    [0.00000000005, 2.22179616897, 1577.3435424478],
];

const Z4: &[Term] = &[
    [0.00000010192, 0.31526267335, 10213.285546211],
    [0.00000000233, PI, 0.0],
    [0.00000000069, 2.32746005974, 20426.571092422],
];

pub static VENUS: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
