//! VSOP87C series for Mars: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [1.51664432758, 6.20347631684, 3340.8562441833],
    [0.2133734347, 2.723903427, 0.2438174835],
    [0.07067734657, 0.2584167963, 6681.46867088311],
    [0.00494034875, 0.59654023167, 10022.0810975829],
    [0.00135189385, 0.59603904502, 3340.36860921629],
    [0.0004092783, 0.93466338314, 13362.6935242827],
    [0.00021051988, 1.80377821704, 3337.33312583431],
    [0.0002102727, 1.1783978568, 3344.3793625323],
    [0.00011370204, 4.832381267, 1059.6257476727],
    [0.00013426076, 0.63015591517, 529.9347825781],
    [0.00006769403, 3.61729412618, 3340.83899053111],
    [0.00006769355, 5.64806575768, 3340.8734978355],
    [0.00008285925, 1.86109008374, 2280.98667902709],
    [0.0000543391, 1.11806362109, 2942.7072407751],
    [0.0000481333, 1.85023048147, 3739.0052475915],
    [0.00004893493, 4.4276039779, 5622.08674069391],
    [0.00005269759, 2.33019561512, 6151.7777057885],
    [0.00003774767, 0.82510516838, 6680.98103591609],
    [0.00003623045, 6.10862866873, 796.5418242999],
    [0.00003725058, 1.27278649428, 16703.3059509825],
    [0.00003767289, 1.22204844262, 398.3928208917],
    [0.00002396177, 0.6349683616, 3149.4079780717],
    [0.00002262756, 2.34867489134, 3532.3045102949],
    [0.00001976674, 2.14058651048, 6677.9455525341],
    [0.00002227632, 1.69533548136, 3340.78893388051],
    [0.00002227573, 1.28683909451, 3340.9235544861],
    [0.00001950645, 2.728091172, 2544.5582373669],
    [0.00002179897, 1.69534718656, 6283.3196674749],
    [0.00001684046, 3.14928536452, 5885.1706640667],
    [0.00002237564, 4.82103877835, 8962.6991673937],
    [0.00001629438, 0.24065025766, 4137.1542509997],
    [0.00001957286, 1.51885757913, 6684.9917892321],
    [0.00001382161, 2.17182492289, 1751.2957139325],
    [0.00001364523, 0.46059571034, 2811.1652790887],
    [0.00001285835, 4.70544160337, 1194.6908277081],
    [0.00001468951, 1.87682106061, 3870.54720927791],
    [0.0000157221, 4.8478453189, 1589.3167127673],
    [0.00000955879, 5.37058897391, 426.8420083595],
    [0.00000819304, 5.1587512214, 4400.2381743725],
    [0.00000714429, 2.92303461187, 191.2044486281],
    [0.00000719663, 2.65486751128, 9492.3901324883],
    [0.0000064326, 4.55789424001, 5487.0216606585],
    [0.00000795172, 4.39660517598, 5092.3957755993],
    [0.00000630906, 3.95541777233, 6681.45141723091],
    [0.00000630906, 5.98618940383, 6681.4859245353],
    [0.00000782173, 1.16801410137, 5091.90814063229],
    [0.00000703756, 0.96657545612, 213.5429129215],
    [0.00000581847, 3.95231836766, 3185.43584474911],
    [0.00000553454, 5.31409832853, 3496.2766436175],
    [0.0000066346, 3.74354794256, 2544.07060239989],
    [0.00000491963, 2.17574433513, 7079.61767429131],
    [0.00000426327, 5.14926594152, 2145.92159899169],
    [0.0000053391, 3.30010366565, 1592.8398311163],
    [0.00000386953, 5.0733765075, 8433.00820229911],
    [0.00000417478, 3.9642568219, 3339.8759231151],
    [0.00000417367, 5.30109299779, 3341.83656525151],
    [0.00000359961, 1.61089747813, 20043.9183776823],
    [0.00000352641, 3.88893523415, 6254.8704800071],
    [0.00000351819, 5.16992059902, 12303.3115940935],
    [0.0000032132, 1.94435133813, 3554.1553396213],
    [0.00000377309, 4.13476329642, 2146.4092339587],
    [0.00000307274, 0.94421931529, 3127.5571487453],
    [0.00000284287, 2.03419702203, 7.3573644843],
    [0.00000259684, 1.89385284662, 1990.9888345245],
    [0.00000246886, 0.27164096909, 1747.7725955835],
    [0.00000313688, 5.10599974151, 4535.3032544079],
    [0.00000271483, 1.947782842, 6468.1695754451],
    [0.00000298122, 5.96616996596, 5088.8726572503],
    [0.00000223194, 3.55284314213, 3320.0808486909],
    [0.00000221461, 5.71228247661, 3361.6316396757],
    [0.00000233899, 2.03689241948, 9623.9320941747],
    [0.00000207617, 2.03345912239, 6681.40136058031],
    [0.00000205148, 1.8577560726, 10025.6042159319],
    [0.00000207784, 2.47827795124, 10018.5579792339],
    [0.00000193198, 4.93193682847, 2119.00767786191],
    [0.0000021863, 0.97526221043, 6490.0204047715],
    [0.0000024799, 1.31792500524, 2913.7704183403],
    [0.00000207617, 1.62496273555, 6681.5359811859],
    [0.00000178587, 2.54120991611, 1221.6047488379],
    [0.000001784, 1.02824622233, 10021.5934626159],
    [0.00000164293, 1.09050742498, 4690.7236538421],
    [0.00000157091, 0.48700512124, 2389.1378379327],
    [0.00000151308, 1.43281018748, 4562.2171755377],
    [0.00000177027, 4.27007713386, 2957.9597119601],
    [0.00000147685, 2.47506585562, 7211.1596359777],
    [0.00000164646, 0.57567045734, 7477.7666776995],
    [0.00000153884, 4.44526715317, 640.1411037975],
    [0.00000157989, 4.99618947427, 3723.7527764065],
    [0.00000146757, 4.41545990951, 3337.26581553151],
    [0.00000166434, 3.16925511951, 10213.5293636945],
    [0.00000146132, 4.84659253705, 3344.4466728351],
    [0.00000118082, 4.29228989356, 4562.70481050471],
    [0.0000011977, 4.65884659981, 11773.6206289989],
    [0.00000113695, 2.49810201078, 4292.5746504339],
    [0.00000143954, 5.36191839973, 2787.2868413409],
    [0.00000113828, 3.49219829771, 3333.7426971825],
    [0.00000112131, 0.07204419182, 3205.7911641479],
    [0.00000144684, 1.67820772946, 1349.62359217529],
    [0.00000118108, 5.18561000649, 4929.92913946711],
    [0.0000010669, 2.90949586529, 3475.92132421871],
    [0.00000120237, 3.40929466701, 9225.7830907665],
    [0.00000119599, 3.90588399352, 3894.4256470257],
    [0.0000010491, 5.51977893032, 382.6527147397],
    [0.0000009592, 5.81540533813, 3347.96979118411],
    [0.00000093778, 5.54256544882, 1748.2602305505],
    [0.00000088754, 2.98682152461, 12833.00255918811],
    [0.00000112794, 5.89797835701, 155.17658195069],
    [0.00000091596, 3.08454019471, 951.4745887671],
    [0.00000086667, 0.43803962703, 3098.1276402093],
    [0.000001185, 0.52380467505, 7902.8296022375],
    [0.00000089906, 2.29494981588, 2942.21960580809],
    [0.00000085205, 4.21443205483, 2281.4743139941],
    [0.0000011366, 5.58557229219, 5486.53402569149],
    [0.0000008064, 2.54197906469, 3583.5848481573],
    [0.00000085344, 3.68498025243, 4933.4522578161],
    [0.00000084447, 0.9797420982, 6674.3551238823],
    [0.00000079513, 0.7095639851, 5088.3850222833],
    [0.00000101901, 0.62374863015, 529.44714761109],
    [0.00000073054, 5.03109665468, 1052.51220067191],
    [0.00000073997, 5.88971113539, 3767.4544350593],
    [0.00000070372, 4.49111053246, 553.32558535889],
    [0.00000091916, 4.26029980883, 9595.4829067069],
    [0.00000073607, 5.48588623719, 7740.8506010723],
    [0.00000066068, 1.6035241471, 1066.7392946735],
    [0.00000081219, 4.0041769285, 2810.6776441217],
    [0.0000006643, 2.30115866241, 2700.4713229023],
    [0.00000054145, 4.29245819665, 6526.04827144891],
    [0.00000059768, 4.81363180968, 6041.5713845691],
    [0.00000066173, 0.04112658538, 10022.0983512351],
    [0.00000049883, 5.09321137459, 3312.4070567155],
    [0.00000049178, 4.1723431353, 3369.3054316511],
    [0.00000048202, 5.03755934935, 397.9051859247],
    [0.0000004731, 5.51367266321, 15643.9240207933],
    [0.00000048401, 1.00254354626, 3.76693583251],
    [0.00000066173, 4.29354026107, 10022.06384393071],
    [0.00000043167, 2.11330967332, 4690.23601887509],
    [0.00000052329, 5.35612779574, 7903.3172372045],
    [0.00000043258, 1.94634380811, 149.8070146181],
    [0.00000053318, 2.50854201221, 10420.23010099111],
    [0.00000038925, 5.63931982315, 6682.44899195131],
    [0.00000043058, 2.71172733627, 3325.6037729983],
    [0.00000042835, 0.27036084223, 3356.10871536831],
    [0.00000049042, 5.09197877772, 2273.8731320263],
    [0.00000045897, 1.73176272729, 2288.1002260279],
    [0.00000036267, 1.94902636545, 23384.5308043821],
    [0.00000050027, 4.92232111087, 5621.5991057269],
    [0.00000041152, 3.60849241104, 537.0483295789],
    [0.00000038722, 0.77097024087, 522.8212355773],
    [0.00000044751, 4.31225718691, 3077.77232081051],
    [0.00000031695, 4.22324584554, 5629.2002876947],
    [0.00000031478, 2.2637033318, 5331.6012612243],
    [0.00000033349, 2.12149635572, 242.97242145751],
    [0.0000003613, 2.27448966151, 9808.78200214491],
    [0.0000003166, 5.11359333219, 2648.6986429565],
    [0.00000039058, 4.30336342995, 6680.4883498149],
    [0.00000032374, 5.44019764272, 7875.91568110771],
    [0.00000038493, 2.35050388066, 6894.76776632111],
    [0.00000040044, 4.95433661511, 3603.9401675561],
    [0.00000027893, 0.75588690511, 7373.13863714289],
    [0.00000027665, 2.37934374634, 12964.5445208745],
    [0.00000027878, 0.66739091469, 1350.1112271423],
    [0.00000028322, 2.5396183826, 8030.8484455749],
    [0.00000028486, 1.37297559963, 5614.9731936931],
    [0.00000029761, 5.41923539807, 3178.38960805111],
    [0.00000035657, 1.13413038335, 8428.9974489831],
    [0.00000028159, 3.83299371524, 3503.3228803155],
    [0.00000027295, 5.8581808312, 213.0552779545],
    [0.00000024083, 4.10582287293, 4033.0138454101],
    [0.00000023726, 3.79203465807, 3320.50092478451],
    [0.00000023543, 5.47205540117, 3361.2115635821],
    [0.00000024407, 1.62000405809, 76.50988875911],
    [0.0000002236, 4.86162540597, 15114.2330556987],
    [0.00000022681, 2.19545260317, 13366.21664263171],
    [0.00000030767, 1.97333726282, 102.84895673509],
    [0.00000023116, 4.24443125854, 1692.40948698591],
    [0.00000024795, 2.94450891135, 691.9137837433],
    [0.00000021819, 1.96227087233, 10022.1484078857],
    [0.0000002142, 3.9043458363, 6660.6932753907],
    [0.00000020686, 4.0917246465, 1582.2031657665],
    [0.00000025165, 0.35004555829, 3335.3333198759],
    [0.00000021819, 2.37076725917, 10022.01378728011],
    [0.0000002511, 2.63051920012, 3346.3791684907],
    [0.00000022778, 1.314320649, 9830.6328314713],
    [0.00000021875, 4.80561875471, 11243.9296639043],
    [0.00000019487, 2.47923244785, 3336.8454908673],
    [0.00000025048, 2.47380350738, 1648.2029397139],
    [0.00000019285, 0.96932439937, 3330.2195788335],
    [0.00000019206, 2.01113330365, 3351.49290953311],
    [0.00000019577, 0.82781613472, 6438.7400669091],
    [0.00000023713, 0.7869631722, 796.0541893329],
    [0.00000018024, 0.80164082178, 3.2793008655],
    [0.00000017457, 0.90670155624, 6872.91693699471],
    [0.00000020758, 2.68199279076, 2914.2580533073],
    [0.00000023325, 2.81224294003, 1758.40926093329],
    [0.00000019762, 1.19465593585, 2818.2788260895],
    [0.00000018903, 1.70198303484, 3863.4336622771],
    [0.00000018548, 1.8643535234, 3343.8917275653],
    [0.00000020024, 5.23513746258, 9382.18381126891],
    [0.00000023004, 2.81536425224, 13359.1704059337],
    [0.00000020686, 6.04843065741, 6702.2440663755],
    [0.00000017546, 0.76946873055, 3074.24920246151],
    [0.00000021953, 6.16726175116, 10713.75106384269],
    [0.00000022478, 3.36629130965, 3531.81687532789],
    [0.00000017443, 6.23925536469, 7063.87756813929],
    [0.00000016475, 1.75316661727, 8432.52056733209],
    [0.00000016284, 4.60826689329, 6298.57213865991],
    [0.00000016296, 2.90679614817, 10551.7720626775],
    [0.00000021367, 3.52004981807, 4292.0870154669],
    [0.00000015862, 5.88391024825, 3723.26514143949],
    [0.00000016182, 3.94577566715, 7632.6994421667],
    [0.00000018728, 1.73152268876, 4032.52621044309],
    [0.00000017711, 0.91113854617, 10818.3791043993],
    [0.00000016214, 2.21183941484, 3607.46328590511],
    [0.00000020207, 0.50430731047, 2708.07250487011],
    [0.00000017851, 5.47859973724, 6836.8890703173],
    [0.00000014367, 3.47695884338, 8429.4850839501],
    [0.00000016523, 2.14637482599, 6158.8912527893],
    [0.00000019608, 3.51602051779, 853.4401992355],
    [0.00000014968, 1.03757514888, 6531.9054737485],
    [0.00000013797, 2.36391887749, 419.72846135871],
    [0.00000013414, 2.94536295838, 3127.0695137783],
    [0.00000015245, 2.24543615829, 7064.3652031063],
    [0.00000015674, 4.46460349265, 3333.8100074853],
    [0.00000013513, 5.18432808372, 6685.0590995349],
    [0.00000016177, 0.84378599845, 5729.7502646325],
    [0.00000016167, 5.63583810469, 6144.6641587877],
    [0.00000013924, 4.60961152326, 12936.0953334067],
    [0.00000012758, 2.28807897894, 3336.9749088253],
    [0.00000016755, 2.44526644281, 3973.6399834965],
    [0.0000001274, 0.69410204881, 3344.73757954131],
    [0.00000015216, 5.27437629135, 5459.6201045617],
    [0.00000013755, 5.25003721422, 433.9555553603],
    [0.00000013727, 5.70869872406, 6127.8992680407],
    [0.00000016418, 5.42287303075, 75.0254160508],
    [0.00000012379, 3.30493783022, 2487.1722274643],
    [0.00000012121, 4.87336947084, 3980.7535304973],
    [0.00000012145, 4.64108642144, 3281.4823822697],
    [0.00000016915, 0.30896398254, 10404.48999483909],
    [0.00000013732, 4.74929587262, 6677.8782422313],
    [0.00000012163, 4.3703983816, 10973.3118688665],
    [0.00000011839, 4.62276702188, 3400.23010609691],
    [0.0000001346, 1.58419502448, 1596.43025976811],
    [0.0000001195, 5.43572222924, 1744.1821669317],
    [0.00000014031, 4.77979856866, 8031.3360805419],
    [0.00000013621, 5.59064545004, 3415.63784275061],
    [0.0000001189, 5.01320389678, 4989.3030013807],
    [0.00000011133, 5.52124766174, 8270.5415661669],
    [0.00000011115, 3.25426586017, 6816.53375091851],
    [0.00000010961, 2.86101048703, 110.45013870291],
    [0.00000012029, 4.05861575489, 1751.7833488995],
    [0.00000012954, 4.66570452942, 8969.8127143945],
    [0.00000012975, 3.69069473524, 3266.074645616],
    [0.00000013898, 0.43379973859, 6546.4035908477],
    [0.00000010787, 3.68885960945, 11770.0975106499],
    [0.00000013676, 4.64950162211, 3347.90248088131],
    [0.00000014429, 0.35374653823, 6041.08374960209],
    [0.00000010265, 5.1500840588, 5099.50932260011],
    [0.00000010855, 0.89301290681, 3316.97780643551],
    [0.00000013203, 1.76870797269, 8955.58562039291],
    [0.0000001075, 2.08914960461, 3364.7346819311],
    [0.00000012106, 3.38174169479, 6.86972951729],
    [0.00000010745, 3.32222106136, 16173.6149858879],
    [0.00000010862, 6.16671167895, 7633.1870771337],
    [0.0000001313, 6.21487916243, 6688.5822178839],
    [0.00000012618, 2.02052426773, 3443.94901840191],
    [0.00000010348, 0.91493796382, 5884.68302909969],
    [0.00000011408, 0.87656413019, 3237.7634699647],
    [0.00000010014, 4.92767694376, 3893.93801205869],
    [0.0000001333, 2.96193815385, 11371.4608722747],
    [0.0000000939, 3.13708066819, 6151.2900708215],
    [0.00000009317, 6.04347781776, 3304.8283775059],
    [0.00000009588, 3.93497646953, 14584.5420906041],
    [0.00000009187, 3.22190702341, 3376.88411086071],
    [0.00000008922, 4.01975646099, 8274.0646845159],
    [0.00000012186, 1.30797225041, 10014.9675505821],
    [0.00000008852, 2.35096921245, 2921.37160030811],
    [0.00000011498, 3.39107154427, 3024.4643745267],
    [0.00000008932, 2.04695690729, 3340.4361680897],
    [0.00000008932, 0.93521735776, 3341.27632027691],
    [0.00000010791, 1.20222738595, 13362.2058893157],
    [0.0000001044, 5.86847040226, 3657.24811383991],
    [0.00000010488, 2.33198909218, 12168.2465140581],
    [0.00000007791, 3.37156314108, 162.2228186487],
    [0.00000008278, 1.36101802767, 6605.2025996075],
    [0.0000000773, 1.32895910157, 7235.0380737255],
    [0.00000010793, 2.47932423892, 135.30889751891],
    [0.00000009855, 2.07588323732, 951.9622237341],
    [0.0000000757, 4.28016049737, 1861.5020351519],
    [0.00000007347, 0.73950074439, 3760.3408880585],
    [0.00000007458, 5.07772886658, 11371.9485072417],
    [0.00000007415, 5.77777265612, 10575.1628654583],
    [0.00000007387, 5.61828044516, 7373.62627210991],
    [0.0000000733, 0.37925022199, 13362.7107779349],
    [0.00000007563, 4.15753542979, 3134.67069574611],
    [0.00000008273, 0.81705527879, 633.0275567967],
    [0.00000009017, 4.88682687946, 6784.5614451017],
    [0.0000000733, 4.63166389767, 13362.6762706305],
    [0.00000006892, 3.80196693431, 3170.1833735641],
    [0.00000009499, 1.85422005926, 191.6920835951],
    [0.0000000839, 3.35818184456, 12566.3955174663],
    [0.00000007258, 5.07622910043, 3547.0417926205],
    [0.00000007563, 3.43861002197, 3209.3142824969],
    [0.00000007609, 5.08370549642, 3304.25087887911],
    [0.0000000749, 2.87715807563, 6924.1972748571],
    [0.00000006532, 2.77753405872, 1118.5119746193],
    [0.00000006446, 3.48151772817, 3340.4263610566],
    [0.00000006446, 5.78384184406, 3341.28612731],
    [0.00000008809, 3.95809596395, 8827.6340873583],
    [0.00000006453, 5.46311522509, 3511.5291148025],
    [0.00000007497, 4.18166418924, 3377.4616094875],
    [0.00000006647, 1.41691169841, 1376.0176173293],
    [0.00000006444, 2.33688278488, 1479.11039154791],
    [0.00000006777, 5.65281173718, 1194.2031927411],
    [0.00000006272, 1.03860361018, 11243.44202893729],
    [0.00000007647, 5.81483718115, 11081.46302777211],
    [0.00000006372, 2.85534407747, 8827.14645239129],
    [0.00000008206, 5.35126987297, 7234.5504387585],
    [0.00000006106, 0.08823631309, 10184.06009874809],
    [0.00000006255, 2.84195845072, 956.53297345411],
    [0.00000006895, 5.82543451964, 3472.39820586971],
    [0.00000005956, 0.71294472658, 641.12142486571],
    [0.00000006342, 5.95803230213, 1162.7185218913],
    [0.00000008015, 5.74289052633, 5828.2722891311],
    [0.00000006858, 1.3745804522, 5085.2822285985],
    [0.00000005564, 4.5250048974, 949.4194264533],
    [0.00000005685, 6.19978628309, 13915.77529215809],
    [0.00000005989, 2.84289974537, 13760.8425276909],
    [0.00000006614, 1.02737793204, 5099.0216876331],
    [0.00000006046, 5.85461434376, 18984.5364474931],
    [0.00000005388, 3.18378253913, 1228.7182958387],
    [0.00000006477, 3.19289948037, 2177.8939048085],
    [0.00000006716, 4.42516229875, 5084.7945936315],
    [0.00000006834, 3.8740707481, 6606.6870723158],
    [0.00000006185, 0.69582667501, 220.6564599223],
    [0.00000005372, 1.74198025456, 2766.5114458485],
    [0.00000006939, 5.44031621555, 8329.9154280805],
    [0.0000000525, 4.43412282387, 224.5886131854],
    [0.00000005178, 3.38283339119, 3274.36883526891],
    [0.00000005636, 4.62896008864, 9866.66069814871],
    [0.00000005018, 5.87780776958, 3407.3436530977],
    [0.00000006287, 4.27847352716, 2222.1004520805],
    [0.00000006027, 4.29283875964, 3340.3513555641],
    [0.00000006581, 5.36035626468, 38.3768531213],
    [0.00000006293, 5.74754269848, 8440.1217492999],
    [0.00000004882, 2.57565728394, 10404.9776298061],
    [0.00000004795, 1.93507580186, 4407.3517213733],
    [0.00000006476, 4.86709384177, 3297.1373318783],
    [0.00000006362, 4.39851396252, 3384.5751564883],
    [0.00000005306, 4.2789295522, 206.42936592071],
    [0.00000006484, 0.01882718386, 7108.06686175911],
    [0.00000004752, 0.76109516197, 6261.9840270079],
    [0.00000006261, 5.3095522011, 1964.5948093705],
    [0.00000005039, 4.00989442055, 6247.7569330063],
    [0.00000006027, 0.04042508285, 3340.38586286849],
    [0.00000004586, 4.507174936, 6709.91785835091],
    [0.00000004635, 1.37708243435, 263.3277408563],
    [0.0000000487, 5.44486723246, 4393.1246273717],
    [0.00000006261, 4.40252342346, 26088.1469590577],
    [0.00000004434, 4.89543652156, 155.6642169177],
    [0.00000004383, 3.06060463606, 6666.2161996981],
    [0.00000004389, 2.60327063667, 13149.3944288447],
    [0.00000004433, 1.50884053543, 2807.6421607397],
    [0.0000000498, 1.32305016589, 5827.78465416409],
    [0.00000004443, 1.24237319799, 3915.2010425181],
    [0.00000004299, 5.46246418866, 8962.2115324267],
    [0.00000004356, 2.71657046567, 10235.3801930209],
    [0.00000004498, 3.48518081494, 553.8132203259],
    [0.00000005019, 2.56129005058, 3738.51761262449],
    [0.00000004315, 4.84313966445, 3877.6607562787],
    [0.00000004072, 1.76821812939, 574.10098085129],
    [0.00000004107, 4.64137843892, 10021.1007765147],
    [0.00000003964, 0.04229553627, 3495.78900865049],
    [0.00000004785, 1.84722253955, 2699.9786368011],
    [0.00000005396, 4.78692961565, 14313.9242955663],
    [0.00000003822, 2.21613892883, 3490.4194413179],
    [0.00000004095, 5.97738996422, 10023.06141865111],
    [0.00000003697, 0.08404470764, 6571.2623496637],
    [0.00000003779, 1.32451866449, 13517.62628874989],
    [0.0000000386, 0.47636916025, 6836.40143535029],
    [0.00000004702, 4.02327796277, 2111.8941308611],
    [0.0000000363, 4.72154111022, 11769.6098756829],
    [0.00000004499, 5.53792455232, 13524.67252544789],
    [0.00000003497, 2.54545971953, 6282.83203250789],
    [0.00000003489, 5.77181356746, 11216.5281078075],
    [0.00000003591, 1.55498611814, 3874.07032762691],
    [0.00000003976, 3.74269735212, 2804.05173208791],
    [0.0000000468, 0.1953061885, 10973.7995038335],
    [0.00000003961, 1.7539902549, 6048.6849315699],
    [0.00000003954, 5.40430940067, 6653.0194834153],
    [0.00000003352, 2.05742522098, 8425.8946552983],
    [0.00000004016, 1.12722498592, 3981.73385156551],
    [0.00000003356, 6.22809815165, 9168.88471583091],
    [0.0000000426, 1.53810484916, 3333.2550622155],
    [0.00000003936, 1.03505935194, 6843.4476720483],
    [0.00000003767, 2.28715050291, 26725.1432310819],
    [0.00000003388, 5.15160395842, 18454.8454823985],
    [0.00000003337, 3.21108403976, 13936.5506876505],
    [0.0000000323, 5.56219394317, 262.84010588929],
    [0.00000004019, 0.60853180976, 6696.72114206811],
    [0.00000003967, 1.75879114367, 266.85085920531],
    [0.00000003932, 3.7554824354, 2384.0794532457],
    [0.00000003087, 0.64142856871, 5202.6020968187],
    [0.00000003922, 4.95967156091, 4459.61203628611],
    [0.00000003717, 1.43162034575, 2906.6568713395],
    [0.00000003266, 2.71766260163, 16305.1569475743],
    [0.00000003104, 1.55447444218, 5305.6948710373],
    [0.00000003, 5.12142568188, 10714.23869880971],
    [0.00000003921, 0.90004199829, 10177.01386205009],
    [0.00000003084, 0.06473956323, 1059.1381127057],
    [0.00000003253, 3.2289487674, 5518.9939664753],
    [0.00000002861, 3.34583941548, 1331.8110700573],
    [0.00000003304, 2.59879254413, 8672.21368792411],
    [0.00000002975, 1.60725252181, 10575.6505004253],
    [0.00000002756, 2.2567262233, 6040.5910635009],
    [0.0000000295, 5.25312754456, 6944.5525942559],
    [0.00000003005, 5.51425578501, 2707.58486990309],
    [0.00000002717, 5.76321921177, 6519.0020347509],
    [0.00000002801, 1.7455774998, 16858.23871544969],
    [0.00000002897, 3.96845114135, 2700.9589578693],
    [0.00000003274, 4.32367822866, 2920.8839653411],
    [0.00000002645, 5.46774026264, 5989.3110696563],
    [0.00000003228, 4.33146477085, 647.25465079831],
    [0.00000002528, 1.65349433627, 13171.2452581711],
    [0.00000003531, 4.66472793851, 3190.80541208169],
    [0.0000000259, 0.13630377168, 5725.1795149125],
    [0.00000002501, 4.63633723841, 383.1403497067],
    [0.00000002483, 3.87259614726, 3313.45468808651],
    [0.00000002456, 5.3928393766, 3368.25780028011],
    [0.0000000245, 4.75373878367, 5732.2930619133],
    [0.00000002623, 3.15434704817, 16699.7828326335],
    [0.0000000301, 3.37698665041, 2008.8013566425],
    [0.00000003148, 1.4317630601, 3097.64000524229],
    [0.00000002412, 1.77643225234, 3561.26888662211],
    [0.00000002837, 1.97746221043, 4569.3307225385],
    [0.00000002416, 2.30120840231, 13362.7608345855],
    [0.00000002532, 4.86337013936, 6475.28312244591],
    [0.00000002407, 0.34730498643, 134.8212625519],
    [0.00000002351, 4.11732696406, 17925.1545173039],
    [0.00000003311, 3.56285236974, 17277.16311435029],
    [0.00000002384, 5.9922549788, 9485.2765854875],
    [0.0000000232, 5.45576909738, 14712.5609339415],
    [0.0000000235, 1.08442308251, 533.45790092711],
    [0.00000002433, 3.97615373043, 3171.2760610503],
    [0.0000000286, 5.20645325605, 4569.8183575055],
    [0.00000002382, 2.62777493812, 15508.8589407579],
    [0.00000002274, 2.96629550939, 6686.9915951905],
    [0.00000002448, 4.59094306357, 6418.38474751031],
    [0.00000002223, 2.85609320263, 10595.9382609507],
    [0.00000002362, 5.17828434191, 6843.9353070153],
    [0.00000002247, 0.76007819691, 3338.1047335723],
    [0.00000002247, 2.22209606814, 3343.60775479431],
    [0.00000002877, 3.74013026534, 3870.0595743109],
    [0.00000002167, 1.6885956342, 2126.1212248627],
    [0.00000002861, 1.98905363521, 3342.34071689161],
    [0.00000002948, 1.15364316687, 6414.8616291613],
    [0.00000002832, 0.9895598753, 3339.371771475],
    [0.00000002257, 3.99764421756, 14054.8511255095],
    [0.00000002582, 2.53488965696, 16706.8290693315],
    [0.00000002284, 5.29122374255, 3510.4364273163],
    [0.00000002213, 1.07850009278, 3120.4436017445],
    [0.00000002518, 5.12492489789, 12722.7962379687],
    [0.00000002156, 5.25903110334, 1795.5022612045],
    [0.0000000212, 0.29007019173, 14712.07329897449],
    [0.00000002894, 6.25806113022, 661.4767442645],
    [0.00000002197, 2.83017943957, 7314.2524101963],
    [0.00000002352, 0.68899979183, 6675.9457465757],
    [0.00000002592, 3.56656255149, 846.3266522347],
    [0.00000002011, 5.67994909502, 7800.22446298591],
    [0.00000002009, 4.22466408986, 1592.3521961493],
    [0.00000001985, 1.24704608967, 14158.9915310991],
    [0.00000002025, 3.15545503806, 16460.08971204149],
    [0.00000002756, 1.37300158683, 9872.5179004483],
    [0.00000002586, 4.03791457497, 15110.7099373497],
    [0.00000001977, 2.37034987225, 3340.3012989135],
    [0.00000002046, 5.7991074594, 1214.4912018371],
    [0.00000002049, 1.54711450837, 1545.1101654953],
    [0.00000002016, 5.80333241967, 6701.8239902819],
    [0.00000002591, 1.78624782563, 4459.12440131909],
    [0.00000001944, 1.56628544269, 793.0187059509],
    [0.00000001969, 0.98471628518, 8543.2145235185],
    [0.00000002221, 4.1309398696, 6661.11335148431],
    [0.00000002185, 0.10437662983, 10042.8564930753],
    [0.00000001909, 0.37281275566, 14054.36349054249],
    [0.00000002355, 2.21625400824, 6461.0560284443],
    [0.00000001945, 2.09907033054, 12296.1980470927],
    [0.00000001856, 1.97074291339, 3417.1223154589],
    [0.00000001964, 3.73559626157, 3230.64992296391],
    [0.00000001841, 4.95467577248, 16276.7077601065],
    [0.00000001867, 1.87467602822, 6438.2524319421],
    [0.00000002124, 1.88480889248, 14.47091148511],
    [0.00000001889, 2.84240400113, 2946.2303591241],
    [0.00000002273, 4.24795887217, 10001.3057020905],
    [0.00000001977, 1.96185346705, 3340.43591951909],
    [0.00000001852, 4.40722802585, 2751.79141717511],
    [0.00000001888, 2.02744109255, 3502.8352453485],
    [0.00000001924, 2.83351941687, 205.9417309537],
    [0.000000019, 2.30804703412, 9778.8648586419],
    [0.0000000184, 4.83205314537, 6457.1238751812],
    [0.00000002215, 2.48697776679, 9499.5036794891],
    [0.00000001806, 2.18544314025, 2676.10019905331],
    [0.00000001805, 2.35009306355, 6692.10533623291],
    [0.00000001869, 0.41860742717, 13554.1417903943],
    [0.00000002416, 2.70970478916, 13362.62621397991],
    [0.00000002281, 3.85791196552, 6643.3356352453],
    [0.00000002183, 4.94105874519, 21.0192129759],
    [0.00000001774, 0.68167607326, 323.74923414091],
    [0.00000001748, 4.57092956799, 5033.0219136857],
    [0.00000001767, 4.66859088892, 4555.10362853689],
    [0.00000001973, 5.03143174563, 12310.42514109431],
    [0.00000002109, 2.11500033422, 7204.04608897691],
    [0.00000002169, 1.31433847015, 3148.9203431047],
    [0.00000001672, 2.55080387851, 6948.0757126049],
    [0.00000001685, 5.64872462506, 1434.9038442759],
    [0.00000002274, 0.32514053197, 17256.38771885789],
    [0.00000001724, 0.89161382376, 103.3365917021],
    [0.00000001921, 1.09598172014, 800.06494264891],
    [0.00000001651, 5.91048794937, 6756.2502694504],
    [0.0000000166, 4.94562345671, 9639.18456535971],
    [0.00000001575, 6.09206295741, 7910.4307842053],
    [0.00000001556, 5.31271132117, 743.23387801611],
    [0.00000001578, 2.33595912935, 5614.48555872609],
    [0.0000000208, 2.73283134198, 13119.47728534169],
    [0.00000002163, 0.52943676546, 28.6930049513],
    [0.00000001532, 0.78840953974, 4005.61228931331],
    [0.00000001548, 1.53438288417, 6578.3758966645],
    [0.00000002036, 1.14812219907, 9779.3524936089],
    [0.00000001534, 5.67314504699, 2679.62331740231],
    [0.00000001855, 5.59012601568, 1039.27042827391],
    [0.00000001554, 0.58249651167, 14314.4119305333],
    [0.00000001555, 0.27389127072, 10029.1946445837],
    [0.00000001553, 3.89948887717, 4194.0526259353],
    [0.00000001869, 0.58467331713, 3113.3801113943],
    [0.00000001547, 1.64100920813, 13355.57997728191],
    [0.00000001463, 2.71025544519, 3362.70707350971],
    [0.00000001463, 0.27191881986, 3319.0054148569],
    [0.00000001468, 0.04316622889, 632.5399218297],
    [0.00000001867, 3.32731443087, 13892.3844893773],
    [0.00000001483, 5.79145984345, 2604.9797306515],
    [0.00000001445, 5.7214680092, 12994.9815603533],
    [0.00000001444, 5.09058625219, 10018.4906689311],
    [0.00000001862, 1.31686189323, 6670.8320055333],
    [0.00000001428, 6.05106658591, 9468.51169474051],
    [0.0000000144, 3.90166704313, 2641.5850959557],
    [0.00000001456, 4.84813606347, 3929.9210711915],
    [0.00000001515, 4.40854499352, 4922.8155924663],
    [0.00000001642, 1.18330968138, 9070.3626913323],
    [0.00000001501, 0.37274885135, 664.99986261351],
    [0.00000001434, 5.73698094815, 3283.9578692477],
    [0.00000001756, 5.88702162431, 4672.91113172411],
    [0.00000001552, 0.75524999537, 9887.0160175475],
    [0.0000000143, 5.52560820233, 10025.6715262347],
    [0.00000001459, 2.43643676312, 2693.3577759015],
    [0.00000001423, 3.57254753277, 19800.7021387413],
    [0.00000001403, 3.5279386189, 3397.7546191189],
    [0.00000001451, 2.92581468083, 13745.5900565059],
    [0.00000001366, 1.27672056082, 4555.59126350391],
    [0.0000000158, 3.47199309807, 699.02733074409],
    [0.000000017, 2.39703980797, 3568.3323769723],
    [0.00000001599, 5.02449812818, 3212.83740084591],
    [0.00000001492, 3.59408030079, 6155.3008241375],
    [0.00000001463, 2.6139924996, 1015.4192004007],
    [0.00000001302, 5.67390860842, 5625.6098590429],
    [0.00000001329, 6.06855511718, 3334.1725803092],
    [0.00000001329, 3.19680445505, 3347.53990805741],
    [0.00000001503, 0.2666851417, 3378.98927982111],
    [0.00000001397, 3.16602524069, 588.8210095247],
    [0.000000015, 4.30672667001, 3.6883357796],
    [0.00000001522, 4.24249365559, 3468.8750875207],
    [0.00000001286, 1.87461279962, 3152.93109642071],
    [0.000000016, 1.40701843693, 1905.70858242391],
    [0.00000001339, 2.85153623164, 2699.49100183409],
    [0.00000001563, 4.74033234784, 6674.4224341851],
    [0.00000001455, 5.6208572503, 8800.2325312615],
    [0.00000001337, 3.86347754064, 2277.4635606781],
    [0.00000001259, 3.26565882972, 3742.5283659405],
    [0.00000001315, 0.15620262737, 1191.1677093591],
    [0.00000001298, 3.23907368211, 17395.4635522093],
    [0.00000001692, 1.98709811396, 8646.30729773711],
    [0.00000001571, 5.17275397472, 3451.0625654027],
    [0.00000001377, 2.49780736724, 7255.3258342509],
    [0.00000001223, 2.13508431892, 17654.5367222661],
    [0.00000001272, 6.25716699988, 6997.8605405397],
    [0.00000001293, 5.24149508087, 10125.1738718015],
    [0.00000001205, 2.87986284577, 74.53778108379],
    [0.00000001193, 1.03222295834, 6685.3500062411],
    [0.00000001184, 0.91434121954, 2178.3815397755],
    [0.00000001175, 3.4687207363, 4076.7327577151],
    [0.00000001203, 5.7519613014, 11670.5278547803],
    [0.00000001334, 3.53686819132, 59.13004443009],
    [0.00000001144, 0.93257993677, 3191.29304704871],
    [0.00000001205, 4.89787234183, 6688.51490758111],
    [0.00000001228, 1.09370444041, 2391.6806352135],
    [0.00000001148, 4.01619565855, 4886.21022716211],
    [0.00000001116, 6.08825399135, 15.49628866851],
    [0.00000001253, 3.48476988361, 66.2435914309],
    [0.00000001122, 5.35041736715, 4040.12739241091],
    [0.00000001358, 3.77878000346, 7895.7160552367],
    [0.00000001102, 3.98446017631, 6365.0768012265],
    [0.00000001406, 4.37889002094, 9588.3693597061],
    [0.00000001171, 5.20706500181, 2772.0343701559],
    [0.00000001123, 5.00444898311, 19402.55313533309],
    [0.00000001128, 4.98002753288, 6622.0948089695],
    [0.00000001312, 5.1713551158, 3311.4267356473],
    [0.00000001312, 4.09400445643, 3370.2857527193],
    [0.00000001101, 5.78974461016, 3774.56798206011],
    [0.00000001088, 3.28977902817, 6148.2545874395],
    [0.00000001229, 2.53762292335, 3145.8848597227],
    [0.00000001354, 0.93200823976, 4136.66661603269],
    [0.00000001266, 5.61557722066, 6887.6542193203],
    [0.00000001192, 3.10049513646, 2284.5097973761],
    [0.00000001059, 5.93800224665, 1198.21394605711],
    [0.00000001222, 4.54200893982, 3184.4555236809],
    [0.00000001094, 3.07328576578, 2074.8011305899],
    [0.00000001086, 4.32081022849, 2325.1932262991],
    [0.00000001116, 5.86191156738, 11611.1539928667],
    [0.00000001041, 2.09105531099, 6684.5041542651],
    [0.00000001105, 6.08678077494, 5618.5636223449],
    [0.00000001218, 3.5965474158, 10157.14617761831],
    [0.00000001292, 0.40837478006, 7909.94314923829],
    [0.00000001193, 2.62619989298, 6677.5873355251],
    [0.00000001011, 0.31388757278, 2494.28577446509],
    [0.00000001102, 5.26415591186, 7321.36595719711],
    [0.00000001001, 1.63432488835, 11766.5070819981],
    [0.00000001048, 4.13993269564, 12721.32828193349],
    [0.0000000099, 5.95408825469, 3181.91272640011],
    [0.00000001146, 4.72386914625, 3497.2569646857],
    [0.00000000991, 1.49586957068, 4140.6773693487],
    [0.00000001269, 5.19929518288, 3188.95896309811],
    [0.00000001254, 4.92591337114, 6034.4578375683],
    [0.00000001293, 1.92197905113, 1.7282901918],
    [0.00000001206, 5.33211209828, 6740.84253279671],
    [0.00000001073, 2.22955826533, 9389.2973582697],
    [0.00000001361, 1.69731268075, 9945.8150263073],
    [0.00000000977, 1.92768164917, 3319.52060371631],
    [0.00000000977, 1.05449261588, 3362.1918846503],
    [0.00000000969, 6.07412163761, 1272.9248431107],
    [0.00000001176, 1.01032312893, 9602.5964537077],
    [0.00000001347, 3.63306292592, 19514.2274125877],
    [0.00000001073, 2.70812081471, 6677.4579175671],
    [0.00000000968, 5.81625170021, 522.3336006103],
    [0.00000001192, 3.92438816098, 1222.09238380491],
    [0.00000001237, 5.72667761991, 5835.38583613191],
    [0.00000001057, 1.2943053889, 2597.3785486837],
    [0.00000000957, 0.10887247031, 6645.4408042057],
    [0.00000000971, 0.15243087645, 20809.2238071617],
    [0.00000000991, 2.10746769634, 131.7857791699],
    [0.00000001159, 0.42658815264, 9065.7919416123],
    [0.00000000943, 5.50078031935, 3337.31587218211],
    [0.00000000943, 0.62298659929, 3344.3966161845],
    [0.00000000929, 3.64745111813, 4002.0891709643],
    [0.00000000977, 3.694004316, 2538.4923217371],
    [0.00000000938, 5.95942050303, 931.60690433531],
    [0.00000001272, 2.46943992451, 3302.7232085455],
    [0.0000000096, 4.05574189493, 3909.6781182107],
    [0.00000000909, 3.63898193941, 3326.62915018171],
    [0.00000000943, 4.87540027498, 3344.36210888011],
    [0.00000000943, 1.24836664366, 3337.3503794865],
    [0.00000000886, 0.45694838479, 36.84918278771],
    [0.0000000089, 3.60250232314, 169.3363656495],
    [0.00000000925, 3.39789693407, 1486.2239385487],
    [0.00000001156, 4.57673762061, 16061.94070863329],
    [0.00000000879, 5.66441531374, 3355.0833381849],
    [0.00000000965, 4.35386546492, 11614.6771112157],
    [0.00000000874, 3.48389519074, 316.14805217309],
    [0.00000000896, 0.49130824985, 2067.68758358909],
    [0.00000000856, 2.38006031197, 6705.3471086309],
    [0.000000012, 5.49932526392, 2971.1564282429],
    [0.00000001091, 5.80152513875, 9168.39708086389],
    [0.00000000871, 3.68107437791, 9380.71585523369],
    [0.0000000107, 4.75389970378, 426.3543733925],
    [0.00000001039, 1.92437940169, 4937.0426864679],
    [0.00000000968, 0.44516536655, 8959.1760490447],
    [0.00000000852, 0.05056797182, 8013.52355842391],
    [0.00000000868, 4.22726507605, 9947.2994990156],
    [0.0000000089, 0.04474613839, 6747.9560797975],
    [0.00000000834, 2.38508120043, 6681.0485947895],
    [0.00000001025, 2.15735900007, 3914.71340755109],
    [0.00000000838, 3.57907497775, 4672.42349675709],
    [0.00000000872, 5.33485611894, 11780.7341759997],
    [0.00000000998, 4.91720456967, 16335.59398705309],
    [0.00000000814, 4.96978756082, 16703.28869733031],
    [0.00000001043, 4.06758688367, 3492.7535252685],
    [0.00000000878, 3.45694168055, 3233.19272024471],
    [0.00000000814, 0.71737388513, 16703.3232046347],
    [0.00000000821, 1.52684790788, 3323.04372206531],
    [0.00000000821, 1.45532635717, 3358.6687663013],
    [0.00000000861, 6.07747716764, 170.4290531357],
    [0.00000000895, 6.08078315422, 8966.2222857427],
    [0.00000000809, 5.262044199, 1045.3986536711],
    [0.00000000986, 0.34218165194, 9654.3691336535],
    [0.00000000841, 3.77708723958, 13745.10242153889],
    [0.00000000792, 0.96214307294, 7100.9533147583],
    [0.00000000779, 3.28806023341, 3499.7997619665],
    [0.00000000841, 5.80837213979, 3448.5197681219],
    [0.00000000788, 6.15063940263, 14422.0754544719],
    [0.00000001013, 5.94832458905, 8859.60639317511],
    [0.00000001009, 1.23105531513, 6657.59023313531],
    [0.0000000103, 3.76569779004, 3710.5560601237],
    [0.00000000787, 5.30046515807, 3308.88393836651],
    [0.00000000787, 3.96489441416, 3372.8285500001],
    [0.00000000731, 3.22922044128, 2803.56409712089],
    [0.00000000725, 6.2061363637, 3229.6696018957],
    [0.00000000749, 4.97775385354, 4356.5192620675],
    [0.0000000072, 3.15038755289, 3553.66770465429],
    [0.00000000818, 3.37077170078, 802.1201049627],
    [0.00000000825, 5.84107737328, 3253.5480396435],
    [0.00000000793, 2.67246545703, 11.2895177474],
    [0.00000000864, 3.56004399666, 6717.49653756051],
    [0.00000000969, 2.14091772308, 20198.85114214949],
    [0.00000000917, 1.5556080726, 4776.0039059427],
    [0.00000000729, 5.39749363536, 22743.16556203289],
    [0.0000000073, 5.37089940702, 1063.14886602171],
    [0.0000000086, 3.11478671194, 242.4847864905],
    [0.00000000713, 3.97545007472, 20597.0001455577],
    [0.00000000694, 3.05919399377, 3452.04288647091],
    [0.00000000694, 3.9880916204, 20426.8149099055],
    [0.00000000972, 1.98698742024, 13916.2629271251],
    [0.00000000692, 3.93965986059, 3068.1832868317],
    [0.0000000073, 2.57797232879, 6016.7126257531],
    [0.00000000795, 3.42432574767, 3428.16444872311],
    [0.00000000686, 4.76971489412, 7255.8134692179],
    [0.00000000712, 5.60162243479, 4143.2201666295],
    [0.00000000727, 3.20806928644, 2301.8296333929],
    [0.00000000836, 3.67296892402, 5642.4420600927],
    [0.00000000672, 1.47909475288, 2541.03511901791],
    [0.00000000725, 3.81718268491, 15907.0079441661],
    [0.00000000723, 5.49638926477, 3735.48212924251],
    [0.00000000659, 1.9630208777, 3929.4334362245],
    [0.00000000752, 2.52557851793, 401.91593924071],
    [0.0000000079, 3.21400960006, 10264.80970155691],
    [0.00000000833, 3.27818134172, 6040.10342853389],
    [0.00000000652, 3.12933985544, 3212.90471114871],
    [0.00000000634, 3.17304979978, 17101.4549543907],
    [0.00000000636, 6.11222406149, 17468.6113804619],
    [0.00000000831, 2.90780121075, 2409.4931573315],
    [0.0000000067, 5.9880079776, 15663.79170522509],
    [0.00000000636, 3.9996451541, 5938.4786103505],
    [0.00000000767, 1.34735128779, 16702.81831601549],
    [0.00000000649, 2.88860634271, 485.72823530609],
    [0.0000000072, 4.17180002134, 316.6356871401],
    [0.00000000685, 4.17683462, 1437.41943168211],
    [0.00000000874, 5.00761171285, 3264.10253794069],
    [0.00000000631, 3.92104776965, 3351.9019444472],
    [0.00000000631, 5.34431180258, 3329.8105439194],
    [0.00000000617, 5.30944605959, 3613.52920153491],
    [0.00000000631, 0.15035258857, 3343.3990414641],
    [0.00000000834, 1.27334165089, 6681.88874697671],
    [0.00000000618, 2.29471318966, 6357.9632542257],
    [0.0000000062, 4.22618374757, 2301.34199842589],
    [0.00000000619, 6.1339973997, 3468.8077772179],
    [0.00000000856, 2.79699777939, 6254.38284504009],
    [0.00000000779, 6.20441370524, 22325.1488741929],
    [0.00000000621, 0.55328275382, 22345.0165586247],
    [0.00000000683, 3.20202486335, 3344.7883974464],
    [0.00000000683, 6.06333470888, 3336.92409092021],
    [0.00000000637, 0.86301009432, 151.2914873264],
    [0.000000006, 2.6492252893, 3338.31344690251],
    [0.00000000737, 2.16246318145, 3116.0238135144],
    [0.00000000843, 0.53396130094, 24149.8362338615],
    [0.00000000595, 2.29953648123, 4039.6397574439],
    [0.00000000621, 0.4049892875, 10448.6792884589],
    [0.00000000649, 6.17082186672, 148.32254190981],
    [0.00000000706, 4.51954003602, 6718.0740361873],
    [0.00000000615, 2.10277179076, 1169.83206889211],
    [0.00000000597, 3.77194671714, 2494.77340943211],
    [0.0000000058, 1.1286200657, 3528.7813919459],
    [0.0000000068, 2.77754353712, 1990.5011995575],
    [0.00000000593, 3.34298351276, 9491.90249752129],
    [0.00000000704, 2.61371769364, 3547.5569814799],
    [0.00000000602, 6.12196613719, 6681.8985540098],
    [0.0000000075, 2.93237946903, 6020.2357441021],
    [0.00000000672, 1.12165707971, 6667.2415768815],
    [0.00000000691, 1.16386423121, 6679.9841981748],
    [0.00000000644, 1.94503669392, 4290.0318531531],
    [0.00000000778, 2.85190829858, 394.86970254271],
    [0.00000000606, 5.75275909849, 736.1203310153],
    [0.0000000062, 2.39266198193, 1265.81129610991],
    [0.0000000061, 4.41144858406, 18451.3223640495],
    [0.00000000602, 6.04397580328, 20.11150191529],
    [0.00000000579, 1.80661717855, 2391.1930002465],
    [0.00000000574, 0.81989247879, 9381.69617630189],
    [0.00000000585, 5.02389462382, 2170.7803578077],
    [0.0000000061, 0.51796263381, 9911.8747763635],
    [0.00000000648, 2.64891747863, 4133.6311326507],
    [0.00000000583, 4.50653081612, 8226.8226538619],
    [0.00000000602, 4.20891405026, 2854.8841913937],
    [0.00000000555, 5.99624223583, 16865.28495214769],
    [0.000000006, 4.73583940116, 6725.18758318811],
    [0.00000000766, 4.6104126107, 4775.5162709757],
    [0.00000000577, 4.65659204889, 3184.9482097821],
    [0.00000000587, 5.57127850279, 3194.0445576597],
    [0.00000000613, 3.89681403357, 6549.9267091967],
    [0.00000000696, 0.15859294835, 19004.4041319249],
    [0.00000000634, 4.14004370715, 6510.7958002639],
    [0.00000000634, 1.16000431262, 52176.0501006319],
    [0.00000000603, 2.33995115129, 7896.20369020371],
    [0.00000000658, 2.46906007046, 4988.8153664137],
    [0.00000000602, 3.81964202131, 6681.0387877564],
    [0.0000000052, 2.8272491678, 6467.68194047809],
    [0.00000000522, 5.42478409574, 3339.67560153121],
    [0.00000000522, 3.84057547649, 3342.03688683541],
    [0.00000000528, 4.56727960946, 109.9625037359],
    [0.00000000518, 5.72791791977, 1588.82907780029],
    [0.00000000553, 3.69268120443, 3487.66793070691],
    [0.00000000513, 0.64641381344, 299.37021175271],
    [0.00000000715, 1.53227325055, 4503.3309485911],
    [0.00000000511, 2.84483152183, 16490.0068555445],
    [0.00000000505, 4.83997458246, 1063.55790093581],
    [0.00000000698, 6.07857734312, 43.9627297885],
    [0.00000000609, 0.36018986098, 3134.1555068867],
    [0.00000000645, 5.62278484839, 1641.08939271309],
    [0.00000000542, 4.52460942145, 1596.36294946531],
    [0.00000000502, 5.53009144929, 12323.17927852529],
    [0.00000000569, 1.24397627234, 7380.2521841437],
    [0.0000000053, 1.06670380363, 1699.5230339867],
    [0.00000000491, 5.38693036025, 11140.8368896857],
    [0.00000000518, 5.49646744261, 3443.46138343489],
    [0.00000000545, 2.20958810438, 2288.58786099491],
    [0.00000000509, 5.97803958339, 6813.0106325695],
    [0.00000000489, 3.0670252315, 13575.9926197207],
    [0.00000000486, 1.1700327418, 2274.3607669933],
    [0.00000000579, 4.18326711934, 10177.5014970171],
    [0.00000000535, 4.9682618644, 9072.90548861311],
    [0.00000000536, 0.22940923175, 3198.6776171471],
    [0.00000000478, 5.77347222021, 114.6429243969],
    [0.00000000619, 4.96804844467, 13207.27312484851],
    [0.00000000527, 3.25574629584, 3392.13658204571],
    [0.00000000527, 6.00961327639, 3289.5759063209],
    [0.00000000491, 1.56769780695, 3393.1165590961],
    [0.00000000491, 1.4144764581, 3288.5959292705],
    [0.00000000518, 5.06326236759, 3826.82829697291],
    [0.00000000532, 1.66587585857, 1055.6935944096],
    [0.00000000475, 2.35694443121, 8116.6163326425],
    [0.00000000473, 3.225877899, 4297.14540015391],
    [0.00000000483, 0.44610561215, 131.29814420289],
    [0.00000000483, 5.34340560368, 3346.9221598131],
    [0.00000000483, 3.92195396855, 3334.79032855351],
    [0.0000000046, 1.30188709712, 2281.00393267929],
    [0.0000000046, 5.55430077281, 2280.9694253749],
    [0.00000000488, 5.88179921344, 5195.48854981791],
    [0.00000000604, 0.3318283162, 2373.8853667477],
    [0.00000000491, 5.58315217747, 11251.04321090511],
    [0.00000000482, 2.83595657742, 23.63462026429],
    [0.00000000455, 4.28453161275, 8962.7164210459],
    [0.00000000455, 2.25375998126, 8962.68191374151],
    [0.00000000455, 3.21511534225, 5408.78764525591],
    [0.00000000458, 1.20850177387, 6313.7567069537],
    [0.00000000525, 0.4229002966, 3535.8276286439],
    [0.00000000506, 2.7525583119, 3483.03487121951],
    [0.00000000453, 3.59219997124, 2957.9769656123],
    [0.00000000633, 0.33856779888, 2963.4826362675],
    [0.00000000532, 2.38112136358, 11773.13299403189],
    [0.00000000502, 4.62390876188, 5562.7128787803],
    [0.00000000487, 5.66137463397, 2548.0813557159],
    [0.00000000604, 4.92504643981, 3311.3644258799],
    [0.00000000604, 4.34031313242, 3370.34806248671],
    [0.00000000448, 4.97947122194, 13361.7132032145],
    [0.00000000455, 2.0531733371, 227.7199502725],
    [0.000000005, 2.5381979126, 4819.7228182477],
    [0.00000000452, 6.191606664, 6851.04885401611],
    [0.00000000503, 3.23595850746, 382.6354610875],
    [0.0000000044, 4.69308097742, 3565.2010398852],
    [0.00000000607, 3.16411651832, 5195.0009148509],
    [0.00000000477, 5.99667940023, 4379.8828549737],
    [0.00000000468, 5.3242164747, 4186.9390789345],
    [0.00000000474, 1.58560587121, 2295.2137730287],
    [0.0000000043, 1.74064675227, 4716.63004402911],
    [0.00000000536, 3.39391143643, 860.55374623631],
    [0.00000000561, 0.07745940312, 4272.21933103511],
    [0.00000000427, 3.93324943357, 1575.08961876571],
    [0.00000000456, 3.39763687697, 10006.8286263979],
    [0.00000000455, 3.65437854757, 1854.38848815109],
    [0.00000000421, 3.47192756045, 5753.6287023803],
    [0.00000000539, 2.16591609141, 3185.5031550519],
    [0.0000000044, 2.84607699756, 5490.5447790075],
    [0.00000000411, 3.44829890606, 2480.0586804635],
    [0.00000000433, 4.06813058765, 3376.41897865191],
    [0.00000000433, 5.19722898458, 3305.2935097147],
    [0.00000000448, 0.47019823361, 8955.09798542589],
    [0.00000000416, 5.80949609188, 23539.46356884929],
    [0.00000000423, 0.94668022805, 10037.33356876791],
    [0.00000000481, 1.03096497224, 6685.4008241462],
    [0.00000000538, 4.8087330942, 6637.7497585781],
    [0.00000000403, 0.45532779122, 394.38206757569],
    [0.00000000414, 5.88932386622, 3016.86319255889],
    [0.00000000402, 1.79274198343, 6151.7949594407],
    [0.00000000403, 2.79426969488, 18849.4713674577],
    [0.00000000402, 6.04515565912, 6151.76045213631],
    [0.0000000043, 1.85443040441, 2655.8121899573],
    [0.00000000435, 5.32997749844, 9375.0702642681],
    [0.00000000509, 0.81630529644, 3496.20933331471],
    [0.00000000548, 5.48508184425, 10184.5477337151],
    [0.00000000397, 5.67378728474, 3723.7355227543],
    [0.00000000406, 3.29797001828, 5750.1055840313],
    [0.00000000477, 3.72133708668, 6614.9812619687],
    [0.00000000555, 2.64209868471, 3718.2298520991],
    [0.00000000425, 5.57143459419, 7218.2731829785],
    [0.00000000408, 2.99345508442, 2149.4447173407],
    [0.00000000402, 4.31245835258, 1685.2959399851],
    [0.00000000411, 4.4287830756, 21265.7669440037],
    [0.00000000486, 4.84700116898, 10050.5302850507],
    [0.00000000394, 1.43738424753, 5888.6937824157],
    [0.00000000487, 2.3035769129, 1655.3164867147],
    [0.00000000421, 3.5349054438, 13518.1139237169],
    [0.00000000395, 4.02660480719, 7366.02509014209],
    [0.00000000392, 0.97128057325, 17655.0243572331],
    [0.00000000443, 0.74922233388, 2075.28876555691],
    [0.00000000404, 5.22642617943, 6644.86330557891],
    [0.00000000381, 4.92982666503, 15805.90302195849],
    [0.00000000414, 2.26879885935, 7747.96414807311],
    [0.00000000395, 1.4996260213, 18606.25512851669],
    [0.00000000377, 6.04852731229, 8564.5501639855],
    [0.00000000475, 0.05735729625, 7380.7398191107],
    [0.00000000378, 2.64754791943, 9801.6684551441],
    [0.0000000043, 5.91707320028, 905.2128791813],
    [0.00000000384, 1.10487298901, 3205.30352918089],
    [0.00000000444, 1.82982329075, 2277.054525764],
    [0.00000000397, 0.9532306603, 515.70768857651],
    [0.00000000471, 5.87580736949, 7270.5334978913],
    [0.00000000367, 1.76058008964, 912.32642618209],
    [0.0000000043, 1.89342601713, 5881.6475457177],
    [0.00000000469, 1.15366899488, 7270.04586292429],
    [0.00000000433, 5.04314920496, 2284.9188322902],
    [0.00000000438, 5.12080144325, 9797.73630188101],
    [0.00000000506, 2.90113109352, 1765.5228079341],
    [0.0000000036, 3.5080906165, 20736.0759789091],
    [0.00000000395, 5.60289307177, 7697.1316887673],
    [0.00000000364, 5.97461535482, 3341.3489302845],
    [0.00000000379, 4.68258479838, 5641.9544251257],
    [0.00000000476, 4.55315477415, 1329.75590774351],
    [0.00000000473, 5.45656145574, 21795.4579090983],
    [0.00000000351, 5.70650606381, 6852.1415415023],
    [0.00000000351, 1.54032212267, 2547.5937207489],
    [0.00000000452, 2.07881654365, 6107.1238725483],
    [0.00000000344, 0.65486948739, 16894.7542170941],
    [0.00000000364, 2.28651674734, 6682.9531435914],
    [0.00000000344, 3.35027689955, 5483.4985423095],
    [0.00000000372, 4.65630251193, 1.22413855171],
    [0.00000000452, 2.64378641805, 4307.8271216189],
    [0.00000000349, 3.97626348636, 5636.3138346955],
    [0.00000000362, 3.43448634413, 27681.89692667289],
    [0.00000000376, 4.65142839394, 3339.38828814809],
    [0.00000000347, 0.90845197085, 25685.62898532449],
    [0.00000000351, 4.37546900283, 5452.50655756091],
    [0.00000000348, 3.23789957314, 16865.7725871147],
    [0.00000000345, 2.38118381027, 25287.47998191629],
    [0.00000000358, 1.4835390901, 14584.05445563709],
    [0.00000000336, 2.988203799, 1882.83767561889],
    [0.00000000436, 1.98136341941, 21946.86755521649],
    [0.00000000434, 1.89642061669, 7214.68275432671],
    [0.00000000395, 5.73856202838, 9993.6319101151],
    [0.00000000351, 1.69713753658, 13213.1303271481],
    [0.00000000327, 5.61960069444, 3354.0980165813],
    [0.00000000327, 3.64575887779, 3327.61447178531],
    [0.00000000361, 5.1117705014, 3.34661116829],
    [0.00000000328, 1.43829359971, 2435.3995475185],
    [0.00000000447, 0.03231232062, 13363.67384535091],
    [0.00000000389, 2.62527245368, 30065.7556577817],
    [0.00000000326, 0.96031549475, 3264.59017290771],
    [0.00000000395, 3.32438313829, 3337.4004361371],
    [0.00000000339, 6.08213730855, 14557.1405345073],
    [0.00000000334, 6.05623235898, 147.0555040071],
    [0.00000000335, 0.7922564874, 20617.77554105009],
    [0.00000000347, 5.62869239068, 5223.93773728571],
    [0.00000000344, 1.14994835781, 4025.9002984093],
    [0.00000000314, 2.86750999648, 4142.7325316625],
    [0.00000000347, 4.19150197941, 3265.587010649],
    [0.00000000408, 1.39255335689, 11883.8269502183],
    [0.00000000317, 0.53690715547, 3347.4821562171],
    [0.00000000335, 3.39833290956, 544.1618765797],
    [0.00000000345, 5.10704504215, 5244.2930566845],
    [0.00000000318, 5.7795226152, 12302.8239591265],
    [0.00000000384, 5.87247896307, 7733.7370540715],
    [0.00000000402, 5.10624732337, 8982.5668518255],
    [0.00000000409, 3.94804561206, 23141.3145654411],
    [0.00000000335, 4.32453175361, 3061.06973983091],
    [0.00000000415, 5.56961683825, 12509.4971425307],
    [0.00000000355, 1.45991925898, 7322.34627826531],
    [0.00000000316, 0.87910526351, 3440.4259000529],
    [0.00000000316, 2.10306900154, 3241.28658831371],
    [0.00000000354, 2.21314787069, 4606.4237228097],
    [0.00000000347, 5.76966973208, 14127.99895376209],
    [0.0000000031, 0.93053726029, 6453.9925380941],
    [0.000000003, 3.78819115153, 1987.4657161755],
    [0.00000000304, 1.07677018782, 15265.64270181689],
    [0.00000000299, 5.63009118135, 10285.1650209557],
    [0.00000000379, 3.85337142681, 1461.29786942991],
    [0.00000000294, 3.49253072198, 20040.3952593333],
    [0.00000000295, 5.12372688658, 2487.6598624313],
    [0.00000000313, 2.87465266242, 6286.84278582391],
    [0.00000000307, 1.51056904066, 9755.4740558611],
    [0.00000000306, 6.04685205074, 8756.5136189565],
    [0.00000000313, 1.89942417078, 4982.18945437991],
    [0.00000000392, 3.05316745117, 19645.7693742741],
    [0.00000000361, 6.17342387386, 684.8002367425],
    [0.00000000328, 5.65545524347, 3284.0529820135],
    [0.00000000328, 3.60990432876, 3397.6595063531],
    [0.00000000291, 2.47748718892, 11986.91972443691],
    [0.00000000341, 5.74548283796, 18053.1733606413],
    [0.00000000345, 5.012020542, 16063.4086646685],
    [0.00000000314, 4.21854332735, 9983.9480619451],
    [0.00000000331, 0.26449397604, 6680.99828956829],
    [0.00000000329, 3.7133929882, 2277.95119564511],
    [0.00000000301, 4.17619017646, 1251.0740137843],
    [0.00000000339, 1.15206040807, 2825.39237309031],
    [0.00000000339, 1.83011385698, 3856.3201152763],
    [0.00000000383, 4.85726262562, 2921.9318452827],
    [0.00000000302, 0.20789359091, 12825.8890121873],
    [0.0000000031, 5.3268138437, 2060.5740365883],
    [0.0000000031, 3.86907443553, 5622.1039943461],
    [0.00000000292, 2.3943017056, 17256.8753538249],
    [0.00000000286, 2.5337889932, 279.5426868689],
    [0.0000000033, 1.47284455054, 1073.85284167431],
    [0.00000000382, 2.75070755631, 3267.5591183243],
    [0.00000000382, 0.23146670874, 3414.1533700423],
    [0.00000000304, 4.94294697674, 3620.6427485357],
    [0.00000000326, 0.65821317943, 533.8669358412],
    [0.00000000322, 1.32651672788, 2388.6502029657],
    [0.00000000289, 2.79104178187, 36.27168416091],
    [0.00000000287, 0.85216793603, 5511.8804194745],
    [0.00000000283, 2.78331249725, 12840.1161061889],
    [0.00000000358, 4.64860381703, 568.5780565439],
    [0.00000000282, 2.30704296928, 595.9345565255],
    [0.0000000038, 3.49134141596, 2973.63191522091],
    [0.00000000283, 6.10276906215, 9859.6144614507],
    [0.00000000269, 2.39532753439, 15636.8104737925],
    [0.0000000028, 1.99086077526, 16511.8576848709],
    [0.00000000296, 5.4778716692, 1.24065522479],
    [0.000000003, 4.16267400886, 13525.1601604149],
    [0.00000000331, 4.51690765173, 6680.9637822639],
    [0.0000000031, 1.83830280403, 5622.06948704171],
    [0.00000000323, 5.09944111205, 2266.7595850255],
    [0.00000000284, 4.75295349811, 5085.3495389013],
    [0.0000000032, 5.98266609774, 10720.8646108435],
    [0.00000000317, 3.36262525597, 6048.1972966029],
    [0.00000000269, 4.46031273955, 2744.6778701743],
    [0.00000000318, 3.7547197427, 526.00262931501],
    [0.00000000257, 3.06293713227, 24341.28449997309],
    [0.00000000266, 2.03059365371, 206.9445547801],
    [0.00000000258, 3.36613687261, 8749.4000719557],
    [0.00000000271, 3.84748092274, 3345.42699390331],
    [0.00000000271, 5.41787864949, 3336.2854944633],
    [0.00000000301, 3.14400326371, 10706.63751684189],
    [0.00000000251, 5.53940659235, 3343.9592864387],
    [0.00000000251, 3.72595297988, 3337.75320192791],
    [0.00000000251, 4.94239589656, 9758.9971742101],
    [0.00000000267, 2.53115640127, 6831.0318680177],
    [0.00000000306, 2.93208929772, 12012.8261146239],
    [0.00000000249, 1.56864578441, 4246.3129408481],
    [0.00000000286, 0.19225481574, 1898.5950354231],
    [0.0000000032, 3.6665272068, 536.5606946119],
    [0.0000000029, 2.87280676776, 20047.4414960313],
    [0.00000000268, 3.04782864984, 16703.23864067971],
    [0.0000000025, 2.5243511875, 9698.5756809255],
    [0.00000000248, 5.82252924753, 4534.81561944089],
    [0.00000000246, 5.46974928195, 15651.03756779411],
    [0.00000000309, 5.65012767043, 1903.19299501769],
    [0.00000000247, 1.02711909982, 10016.5581732755],
    [0.00000000262, 5.09398079638, 4025.4126634423],
    [0.00000000312, 0.44934890599, 6033.9702026013],
    [0.00000000245, 4.18381763277, 2939.1841224261],
    [0.00000000317, 2.05559964887, 95.7354097343],
    [0.00000000256, 3.14277515921, 1727.90491115171],
    [0.0000000033, 1.40678844479, 735.6326960483],
    [0.00000000276, 0.25330294458, 6670.4229706192],
    [0.00000000321, 0.33298486449, 11905.1625906853],
    [0.00000000252, 5.12405452534, 5430.63847458231],
    [0.00000000252, 3.32857386946, 21548.7185518083],
    [0.00000000237, 1.01475797851, 194.7275669771],
    [0.00000000258, 4.25971949042, 9488.8670141393],
    [0.00000000269, 3.40948701309, 3867.0240909289],
    [0.00000000265, 4.47702156214, 3053.89388306271],
    [0.0000000024, 3.30477326315, 10027.6040218903],
    [0.00000000321, 4.39956903033, 3759.7806430839],
    [0.00000000319, 5.16195488471, 9815.8955491457],
    [0.00000000251, 1.69379264716, 1280.0383901115],
    [0.00000000239, 1.35799257039, 26481.92699214089],
    [0.00000000251, 0.30789864433, 2790.80995968991],
    [0.00000000326, 5.77590839437, 3708.0805731457],
    [0.00000000235, 5.32419238086, 5106.6228696009],
    [0.00000000293, 4.82940686086, 5628.7126527277],
    [0.00000000323, 0.15779112892, 17086.2024832057],
    [0.00000000311, 1.69858307705, 3290.0237848775],
    [0.00000000311, 1.283591188, 3391.68870348911],
    [0.00000000242, 5.03369279862, 4996.4165483815],
    [0.00000000233, 3.70327934902, 2679.13568243529],
    [0.0000000023, 3.19672105861, 10654.8648368961],
    [0.00000000292, 0.94155136266, 3050.3707647137],
    [0.0000000023, 5.31033620112, 1744.24947723449],
    [0.00000000235, 3.67403387076, 5945.5921573513],
    [0.00000000301, 3.92360235288, 9495.9132508373],
    [0.00000000318, 2.84216979877, 2907.1445063065],
    [0.00000000229, 3.22262757156, 5.2791068239],
    [0.00000000248, 0.37197955444, 1442.0173912767],
    [0.00000000226, 4.14053859051, 1868.6155821527],
    [0.00000000234, 3.57298597343, 2817.7911911225],
    [0.0000000023, 5.02142639697, 4245.82530588109],
    [0.00000000312, 5.79393471603, 4403.76129272151],
    [0.00000000222, 2.77556068119, 1835.56843509031],
    [0.00000000277, 2.78377312092, 7079.1300393243],
    [0.00000000289, 2.2289232673, 6901.8813133219],
    [0.00000000244, 3.78614066645, 5349.4137833423],
    [0.00000000268, 2.639332263, 16703.3732612853],
    [0.0000000025, 1.57631353673, 187.68133027909],
    [0.0000000022, 4.3159117449, 6511.88848775011],
    [0.00000000224, 1.47201980663, 3138.6028490092],
    [0.00000000224, 1.51015445842, 3543.1096393574],
    [0.00000000234, 1.63153005672, 17499.6039577989],
    [0.00000000256, 5.60816219579, 367.4681464459],
    [0.00000000272, 5.08797661427, 2428.2860005177],
    [0.00000000218, 6.20908726956, 2786.7992063739],
    [0.00000000218, 1.17556461134, 6283.3369211271],
    [0.0000000027, 1.81634201038, 11236.8161169035],
    [0.00000000218, 5.42797828703, 6283.3024138227],
    [0.0000000022, 4.76793118335, 3987.86707749811],
    [0.00000000238, 1.21800672651, 2814.68839743771],
    [0.00000000222, 1.93943525542, 1368.9040703285],
    [0.00000000215, 0.44293995073, 13383.4689197751],
    [0.00000000224, 3.68637424288, 77.9943614674],
    [0.00000000221, 4.8115346686, 3937.0346181923],
    [0.00000000226, 4.13866805425, 9279.0910370503],
    [0.00000000256, 5.10926173053, 10596.4258959177],
    [0.00000000211, 0.32856158622, 12200.2188198749],
    [0.00000000212, 1.71628960778, 2392.66095628171],
    [0.00000000216, 4.73005287854, 12928.98178640591],
    [0.00000000237, 4.78833782578, 3627.8186053039],
    [0.0000000022, 2.11904228547, 6530.4210010402],
    [0.00000000213, 4.70667890897, 1484.68867221069],
    [0.00000000262, 0.21389223894, 20.5315780089],
    [0.00000000254, 4.24958766273, 19146.51544865829],
    [0.00000000222, 1.24391244474, 8166.4011605773],
    [0.00000000263, 0.61066006216, 4531.7801360589],
    [0.00000000249, 4.15411886603, 3084.88586781131],
    [0.00000000239, 5.60863730462, 5095.9188939483],
    [0.00000000239, 2.46704465103, 5095.4312589813],
    [0.0000000027, 3.81676548381, 24889.33097850809],
    [0.00000000252, 4.6545922452, 3299.3054531985],
    [0.00000000252, 4.61076732703, 3382.4070351681],
    [0.00000000207, 4.40367735236, 5618.1545874308],
    [0.00000000239, 3.20969165945, 3344.31205222951],
    [0.00000000262, 2.04023447861, 3631.3417236529],
    [0.00000000206, 3.37185879421, 7083.14079264031],
    [0.00000000249, 2.30381341333, 2149.9323523077],
    [0.0000000021, 1.09820249005, 6678.7171602721],
    [0.00000000255, 3.12446085063, 1994.51195287351],
    [0.00000000204, 5.48441633924, 4694.2467721911],
    [0.00000000274, 0.08158298999, 12306.8347124425],
    [0.00000000262, 5.18218468663, 532.9702659601],
    [0.00000000214, 2.76700465239, 9623.4444592077],
    [0.00000000246, 4.44352898187, 151.65346360169],
    [0.00000000223, 4.55939375869, 3345.2182805731],
    [0.00000000223, 4.70596581354, 3336.4942077935],
    [0.00000000255, 0.57678604074, 2942.7244944273],
    [0.00000000224, 3.09503100625, 6533.3899464568],
    [0.00000000245, 3.9319175994, 2142.39848064269],
    [0.00000000201, 0.64350792344, 9360.8481708019],
    [0.00000000282, 5.79937846262, 12465.29059525869],
    [0.00000000199, 4.83221191762, 3030.01544531491],
    [0.00000000243, 5.80725236762, 9329.9234963561],
    [0.00000000233, 4.46399451272, 5834.8982011649],
    [0.00000000205, 5.87364808478, 7167.4407236727],
    [0.00000000199, 4.98231898069, 2957.4720769931],
    [0.0000000022, 1.28938253421, 5626.018893957],
    [0.00000000197, 0.25728561615, 3244.8770169655],
    [0.00000000197, 2.7248886489, 3436.8354714011],
    [0.000000002, 3.33617729049, 6567.0695639697],
    [0.00000000231, 4.21063730317, 6654.0671147863],
    [0.00000000228, 4.31246262185, 3319.59321372389],
    [0.00000000206, 3.05101379573, 7483.3449583623],
    [0.00000000206, 6.19260644932, 7483.8325933293],
    [0.00000000198, 5.49214722476, 3094.6045218603],
    [0.00000000215, 2.54030230126, 2540.5474840509],
    [0.00000000223, 4.58369899094, 13341.9181287903],
    [0.00000000199, 3.86871213743, 2409.00552236449],
    [0.00000000192, 2.31728673105, 6382.3422766139],
    [0.00000000205, 2.6738380557, 3890.9025286767],
    [0.00000000191, 2.1893338541, 2928.4851473089],
    [0.00000000191, 0.79284041095, 3753.22734105771],
    [0.00000000193, 2.6498999383, 117.5636857037],
    [0.00000000194, 2.90629271112, 18208.1061251085],
    [0.00000000197, 2.64056587295, 20206.3850138145],
    [0.00000000194, 2.75330979101, 28628.09240861609],
    [0.00000000212, 0.12612105707, 4538.8263727569],
    [0.00000000192, 5.68657153593, 3365.71500299931],
    [0.00000000192, 3.5787880363, 3315.9974853673],
    [0.00000000218, 2.79753939558, 2142.8861156097],
    [0.00000000226, 5.11126309189, 3596.8266205553],
    [0.00000000253, 0.88845534596, 5415.9011922567],
    [0.00000000187, 1.76835954015, 15107.1195086979],
    [0.00000000207, 2.95174513706, 419.2408263917],
    [0.00000000255, 4.82919971643, 2942.6899871229],
    [0.00000000191, 2.45354674704, 10544.6585156767],
    [0.0000000019, 4.20925049248, 28229.94340520789],
    [0.00000000205, 2.2485521391, 1059.60849402051],
    [0.00000000233, 5.87086760494, 5821.1587421303],
    [0.00000000187, 3.39707563848, 5401.18646328809],
    [0.00000000188, 1.22198431905, 3318.08774757391],
    [0.00000000188, 1.760189946, 3363.62474079271],
    [0.00000000231, 4.09170497266, 9094.2411290801],
    [0.00000000194, 2.01920817535, 2736.0065034785],
    [0.00000000182, 2.90203674966, 5960.3294396769],
    [0.00000000193, 4.00292264985, 7417.3451844149],
    [0.00000000186, 0.33834024196, 11354.1359851237],
    [0.00000000181, 3.45042796588, 1754.8188322815],
    [0.00000000222, 1.29486520765, 3070.6587738097],
    [0.00000000181, 0.71220143855, 4356.03162710049],
    [0.00000000177, 4.43301273664, 3651.6970430517],
    [0.00000000189, 1.8083797286, 6673.8674889153],
    [0.00000000179, 5.05077866044, 15121.3466026995],
    [0.00000000232, 4.23011116665, 3517.54997431711],
    [0.00000000232, 5.03524840558, 3164.1625140495],
    [0.00000000217, 5.77707162486, 220.16882495529],
    [0.00000000176, 4.70413738332, 1903.6806299847],
    [0.0000000018, 2.39448209299, 3348.95011225231],
    [0.0000000018, 0.58769217206, 3332.7623761143],
    [0.00000000179, 3.77310628062, 3587.10796650631],
    [0.00000000205, 4.2793237706, 1059.6430013249],
    [0.00000000187, 2.61826471479, 2619.71701297711],
    [0.00000000176, 5.4743309467, 13465.7862985013],
    [0.00000000242, 0.93268242658, 5408.3000102889],
    [0.00000000178, 2.51501672448, 2973.14428025389],
    [0.00000000226, 0.65351089705, 11925.03027511709],
    [0.00000000174, 6.12894045783, 10096.8626961502],
    [0.00000000188, 5.50048096325, 2575.0631797369],
    [0.00000000175, 0.98347992481, 12299.7884757445],
    [0.00000000232, 4.71901702635, 5351.9565806231],
    [0.00000000174, 6.06374124229, 5243.80542171749],
    [0.00000000177, 4.2891523817, 6872.42930202769],
    [0.00000000177, 0.60438030609, 2573.0074248347],
    [0.0000000021, 2.56022036127, 6684.2201814941],
    [0.00000000175, 5.70361271383, 6708.8702269799],
    [0.00000000174, 0.12430770186, 3156.0063362131],
    [0.00000000182, 4.32115413536, 2011.3441539233],
    [0.00000000169, 5.118132476, 6684.97453557991],
    [0.00000000173, 2.47259223958, 4885.72259219509],
    [0.00000000239, 3.79200199968, 31022.50935337269],
    [0.00000000169, 0.86571880031, 6685.0090428843],
    [0.00000000191, 5.18490906634, 11567.4350805617],
    [0.00000000207, 4.46904668742, 10001.72577818411],
    [0.00000000181, 0.23355817402, 8584.41784841729],
    [0.00000000189, 1.06059790633, 2783.76372299191],
    [0.00000000233, 3.39745394763, 23958.8756027169],
    [0.00000000219, 5.87651375075, 3070.7260841125],
    [0.00000000177, 4.57327453091, 2978.7351074525],
    [0.00000000179, 3.71447292171, 17232.9969160771],
    [0.00000000168, 5.95159678891, 1111.3984276185],
    [0.00000000172, 0.33588249395, 4061.99547538951],
    [0.00000000184, 1.40136911195, 12943.2088804075],
    [0.00000000179, 1.59854865789, 8852.4928461743],
    [0.00000000162, 1.97243550807, 16696.1924039817],
    [0.00000000163, 5.3465917654, 19676.20641375289],
    [0.00000000204, 4.15805864546, 4253.4264878489],
    [0.000000002, 1.68724699588, 3611.0537145569],
    [0.00000000188, 2.44881959486, 2385.61471958371],
    [0.00000000166, 5.16059611, 24491.18197509989],
    [0.00000000168, 2.00217090683, 6166.0047997901],
    [0.00000000201, 5.56233470044, 3738.98799393931],
    [0.00000000184, 6.06162121787, 1155.6049748905],
    [0.00000000163, 1.26202958512, 3335.6570530175],
    [0.00000000163, 1.72014467993, 3346.0554353491],
    [0.00000000158, 3.3926180522, 5490.05714404049],
    [0.00000000162, 3.55591572493, 272.42913986809],
    [0.00000000173, 3.27771655682, 4.1759707466],
    [0.00000000166, 6.26161653226, 21393.7857873411],
    [0.00000000175, 1.20396202464, 2757.8573328049],
    [0.00000000154, 1.26391171796, 4289.0515320849],
    [0.00000000214, 3.94790035362, 1386.13909381971],
    [0.00000000171, 1.64736764034, 10011.4444322331],
    [0.00000000156, 5.65947538133, 10081.4549594965],
    [0.00000000163, 2.0419253951, 13286.4274530071],
    [0.00000000155, 5.55556139897, 8771.2509012821],
    [0.00000000151, 6.02869301104, 15011.1402814801],
    [0.00000000155, 5.9381372645, 1879.31455726989],
    [0.00000000155, 2.60087355671, 2089.53841291549],
    [0.00000000194, 0.09021705575, 3361.1440047087],
    [0.00000000169, 6.19326528274, 7064.34794945411],
    [0.00000000166, 0.77365213441, 6719.6017065209],
    [0.00000000158, 1.56915594044, 8439.6341143329],
    [0.00000000151, 5.901857013, 10228.2666460201],
    [0.00000000151, 2.8294894301, 3525.7061521535],
    [0.00000000149, 1.89551632354, 3664.3616608407],
    [0.00000000196, 3.39238995578, 3610.98640425411],
    [0.00000000166, 2.03190415107, 5466.7336515625],
    [0.00000000167, 2.89181496866, 10288.6881393047],
    [0.00000000156, 0.79100595475, 17394.97591724229],
    [0.00000000147, 1.14044441078, 14577.4285436033],
    [0.00000000147, 2.18386267585, 1898.57778177091],
    [0.00000000154, 1.77068494981, 11457.2287593423],
    [0.00000000172, 5.3954127718, 19617.3201868063],
    [0.00000000166, 2.73543927114, 6908.9448036721],
    [0.0000000016, 0.44981752738, 1346.10047382629],
    [0.0000000018, 5.45674212617, 5220.4146189367],
    [0.00000000159, 0.77814105937, 1505.04399160949],
    [0.00000000171, 5.60623731826, 4399.7505394055],
    [0.00000000178, 2.3175631224, 2807.1545257727],
    [0.00000000201, 1.30992102475, 3739.0225012437],
    [0.00000000148, 0.9864185924, 9154.1474335053],
    [0.00000000146, 0.62125880196, 13369.8070712835],
    [0.0000000017, 5.7420900767, 6677.9282988819],
    [0.00000000147, 1.87608878363, 9918.9883233643],
    [0.00000000147, 5.20291449518, 14481.4493163855],
    [0.00000000147, 1.47480421685, 6850.56121904909],
    [0.00000000159, 0.03020279035, 3334.99904188371],
    [0.00000000159, 2.9519714747, 3346.71344648291],
    [0.0000000015, 2.06659306486, 15110.22230238269],
    [0.00000000143, 1.10166083747, 13227.6284442473],
    [0.00000000189, 6.14146200362, 10042.4364169817],
    [0.00000000153, 4.69206111649, 3702.9773809141],
    [0.00000000168, 2.68821315216, 10032.71776293271],
    [0.00000000155, 3.4782970441, 369.9436334239],
    [0.00000000151, 2.48862413425, 1859.44687283811],
    [0.00000000163, 1.42057059488, 2965.09051261311],
    [0.00000000179, 2.60241794828, 3966.52643649571],
    [0.00000000179, 0.37975631677, 2715.1860518709],
    [0.00000000195, 3.84830983656, 16858.7263504167],
    [0.0000000014, 4.86382612147, 18461.9590293993],
    [0.00000000183, 0.37676347949, 6791.6749921025],
    [0.0000000015, 4.97392660722, 1879.8021922369],
    [0.0000000015, 5.20281046756, 2922.35192137631],
    [0.00000000182, 2.41452857008, 8005.92237645609],
    [0.00000000146, 1.91269041932, 2715.2311079861],
    [0.00000000165, 1.13937556996, 7346.22471601311],
    [0.00000000141, 0.78224513843, 3017.35082752591],
    [0.00000000191, 2.19520817628, 3202.2680457989],
    [0.00000000191, 0.78696608877, 3479.4444425677],
    [0.00000000139, 0.20210254749, 4846.1440532763],
    [0.00000000138, 5.80974078574, 1537.9966184945],
    [0.00000000193, 2.76342547478, 3650.1345668391],
    [0.0000000016, 3.79608374479, 3394.16419046711],
    [0.0000000016, 5.46927582744, 3287.54829789951],
    [0.00000000193, 0.22143365956, 3031.5779215275],
    [0.00000000169, 6.13731522421, 4687.2005354931],
    [0.00000000155, 1.9192819411, 3897.9487653747],
    [0.00000000162, 1.51359934194, 5607.8596466923],
    [0.00000000136, 5.24657523026, 3336.7781805645],
    [0.00000000144, 0.96151831208, 3945.70598488811],
    [0.00000000155, 1.92058338472, 7799.73682801889],
    [0.0000000017, 1.48967640102, 6677.9628061863],
    [0.00000000155, 5.68296928057, 25136.0703357981],
    [0.00000000141, 3.83758141126, 6279.7965491259],
    [0.00000000174, 4.0165076767, 7586.43773258089],
    [0.00000000138, 4.77290767341, 6343.2259719001],
    [0.00000000176, 0.53515924546, 605.0935581883],
    [0.00000000167, 5.28260459939, 8337.0289750813],
    [0.00000000185, 5.57942546824, 27831.79440179969],
    [0.00000000151, 3.22384573444, 2281.05398932989],
    [0.00000000151, 6.20601999951, 8962.7664776965],
    [0.00000000136, 2.37641738096, 12729.9097849695],
    [0.00000000159, 4.80632202174, 8958.7670141306],
    [0.00000000151, 0.33133107918, 8962.63185709091],
    [0.00000000151, 3.63234212128, 2280.9193687243],
    [0.00000000137, 3.04837973833, 6703.3195002095],
    [0.00000000159, 1.7356902189, 8966.6313206568],
    [0.00000000132, 6.26868643109, 12171.7696324071],
    [0.00000000136, 5.59329741401, 8696.0921256719],
    [0.00000000143, 3.76386314585, 4106.6493086297],
    [0.0000000014, 5.9749896737, 27.15773861329],
    [0.00000000179, 3.80633362749, 5724.6918799455],
    [0.00000000133, 4.74386275251, 21150.56954840009],
    [0.00000000131, 6.16697098787, 948.9317914863],
    [0.00000000132, 0.76534708942, 1861.98967011891],
    [0.00000000133, 4.29217117055, 2472.43494513869],
    [0.00000000138, 0.40513336194, 34554.57004618409],
    [0.00000000139, 5.19191345372, 3.8342461353],
    [0.0000000013, 4.35517837249, 529.91752892591],
    [0.00000000157, 5.37876152794, 10787.3865270623],
    [0.00000000133, 6.07532283158, 6624.5702959475],
    [0.00000000148, 3.97691997672, 7051.1684868235],
    [0.0000000013, 4.65904545064, 7594.0389145487],
    [0.00000000132, 4.88502683468, 9594.99527173989],
    [0.00000000138, 0.90971001825, 12406.4043683121],
    [0.0000000013, 0.10276469681, 529.95203623031],
    [0.00000000143, 4.86125646505, 10015.0348608849],
    [0.00000000149, 1.84050714895, 10.88048283331],
    [0.00000000178, 3.08917546737, 2675.61256408629],
    [0.00000000133, 3.17506743739, 29424.39041543249],
    [0.00000000158, 4.74264934391, 6092.4038438749],
    [0.00000000131, 3.6132900776, 158.6997002997],
    [0.00000000134, 6.18217952972, 2954.4365936111],
    [0.00000000142, 5.9325282559, 3041.2422149471],
    [0.00000000164, 5.73696427086, 26083.7779887327],
    [0.00000000145, 4.90613886816, 8373.6343403855],
    [0.00000000172, 6.07544204816, 1086.53966880249],
    [0.00000000128, 0.30967307338, 155.10927164789],
    [0.00000000137, 5.86605729001, 6137.5506117869],
    [0.00000000167, 5.43341203989, 107.9073414221],
    [0.00000000133, 0.23815011517, 12167.75887909109],
    [0.00000000137, 5.46181201519, 14581.0189722551],
    [0.00000000137, 5.81885310871, 20995.1491489659],
    [0.00000000126, 4.56442495497, 37.88921815429],
    [0.0000000013, 2.37779375339, 4108.7050635319],
    [0.00000000137, 4.00489189426, 18052.68572567429],
    [0.00000000131, 3.67362007014, 692.4014187103],
    [0.00000000132, 4.04092682792, 27490.44866056129],
    [0.00000000144, 0.85129982457, 1802.6158082053],
    [0.00000000146, 3.74761052478, 3475.43368925169],
    [0.00000000126, 1.85382678462, 18447.7319353977],
    [0.00000000141, 1.56404343366, 3716.6219757535],
    [0.00000000124, 6.09263518701, 31172.40682849949],
    [0.00000000124, 3.53492874819, 6688.15233475721],
    [0.00000000121, 2.97155384439, 3590.7607049255],
    [0.00000000121, 0.01062042066, 3090.95178344111],
    [0.00000000122, 1.08207213909, 2257.59587624631],
    [0.00000000123, 4.43212874956, 6710.8981794191],
    [0.00000000129, 1.62910369718, 3073.76156749449],
    [0.00000000131, 1.25301701217, 5401.6740982551],
    [0.00000000166, 5.13636005426, 6553.44982754571],
    [0.00000000134, 2.74325583907, 4783.1174529435],
    [0.00000000122, 3.27465422739, 1235.8318428395],
    [0.00000000128, 2.31642376876, 3081.2954391595],
    [0.00000000128, 0.66575049629, 3600.41704920711],
    [0.00000000121, 1.73585336392, 2126.05391455991],
    [0.00000000124, 1.52639839263, 5820.6711071633],
    [0.00000000122, 5.7244596108, 3343.9590378681],
    [0.0000000014, 0.6117636715, 10191.17364574889],
    [0.00000000127, 4.06254894391, 3759.3605669903],
    [0.00000000143, 1.0996206211, 2229.2139990813],
    [0.0000000012, 4.94879981221, 1648.69057468091],
    [0.00000000152, 1.03111182783, 3340.8217368789],
    [0.00000000152, 5.09265509081, 3340.8907514877],
    [0.00000000137, 0.53719849293, 4296.0977687829],
    [0.0000000014, 1.36695700894, 2233.71743849851],
    [0.00000000118, 4.24520508177, 7534.6650526351],
    [0.00000000137, 4.79183279956, 14588.0652089531],
    [0.00000000123, 2.62418379139, 9381.2034902007],
    [0.00000000116, 0.31023473755, 10338.4729672395],
    [0.00000000137, 2.4466313724, 8322.8018810797],
    [0.00000000126, 5.72232356435, 4083.84630471591],
    [0.00000000133, 1.77129764655, 3923.8551555617],
    [0.00000000124, 0.75314756792, 9124.67816855889],
    [0.00000000115, 1.147171772, 6740.3548978297],
    [0.00000000126, 2.90864771221, 3509.9487923493],
    [0.00000000121, 3.21008073536, 3862.94602731009],
    [0.00000000118, 5.38340024977, 1052.02456570489],
    [0.00000000134, 0.59423378961, 6659.6178415567],
    [0.00000000133, 5.00091518953, 28.2053699843],
    [0.00000000113, 0.40887729438, 8436.5313206481],
    [0.00000000133, 2.32355321105, 6147.8455525254],
    [0.00000000113, 4.8120128527, 3116.5114484814],
    [0.00000000154, 5.94823211725, 401.4283042737],
    [0.00000000119, 2.45406070822, 1471.9968445471],
    [0.00000000116, 3.08299355103, 3727.2758947555],
    [0.0000000012, 1.9019282283, 3826.3406620059],
    [0.00000000111, 5.06172588434, 6837.8693913855],
    [0.00000000147, 5.92093564346, 8447.2352963007],
    [0.0000000012, 2.69810029066, 2185.00745180929],
    [0.00000000114, 1.06948367588, 3966.4813803805],
    [0.00000000126, 2.58719720597, 7586.92536754791],
    [0.00000000129, 4.59879750309, 3580.06172980831],
    [0.00000000129, 4.66656206913, 3101.6507585583],
    [0.00000000123, 1.60493496065, 5511.3927845075],
    [0.00000000133, 3.86628532692, 6738.36704581871],
    [0.00000000124, 3.83529166494, 7210.6720010107],
    [0.00000000107, 2.18213862825, 6681.04834621889],
    [0.00000000139, 2.48335135146, 14867.49369840869],
    [0.00000000112, 0.70994163466, 27433.64539839149],
    [0.00000000112, 3.44331255043, 10176.94655174729],
    [0.00000000126, 3.62916769632, 6314.2443419207],
    [0.00000000146, 3.29717245103, 3282.9775481795],
    [0.00000000146, 5.9681871212, 3398.73494018711],
    [0.00000000112, 6.11830849841, 4953.8075772149],
    [0.00000000115, 4.55565863446, 4179.8255319337],
    [0.00000000115, 4.70981861448, 2501.88695643291],
    [0.0000000013, 5.51502060547, 6155.7098590516],
    [0.00000000134, 1.0117768178, 4825.78873387751],
    [0.00000000138, 0.56483252235, 5813.5350068055],
    [0.00000000115, 4.55081877486, 8976.92626139531],
    [0.00000000147, 3.69174223041, 5223.4501023187],
    [0.00000000105, 5.4129105144, 17822.0617430853],
    [0.00000000118, 4.32124194486, 5483.01090734249],
    [0.00000000103, 0.32432296727, 1059.55843736991],
    [0.00000000104, 3.26220203929, 549.80246700989],
    [0.00000000107, 3.7483839793, 7076.0945559423],
    [0.00000000105, 5.49367983392, 6961.2551752355],
    [0.00000000129, 5.5001866082, 2961.48283030911],
    [0.00000000129, 3.76517296403, 3720.2296580575],
    [0.00000000102, 4.98025675709, 3230.16228799689],
    [0.00000000122, 2.69290805626, 27676.8616373325],
    [0.00000000136, 4.29617974542, 765.54924696289],
    [0.00000000116, 0.32033806866, 10213.0417287275],
    [0.00000000115, 6.24129475028, 2631.86644190671],
    [0.00000000102, 3.50373962589, 639.6534688305],
    [0.00000000104, 6.25966851912, 31450.0708602353],
    [0.00000000141, 5.3700425201, 6456.63624021419],
    [0.00000000138, 4.70210522548, 12295.71041212569],
    [0.00000000127, 5.95836944391, 2655.74487965451],
    [0.00000000101, 4.76282120148, 21791.9347907493],
    [0.00000000103, 5.89952296685, 3134.1830607791],
    [0.000000001, 0.05360387756, 31213.95761948429],
    [0.00000000115, 2.72333533541, 21000.67207327329],
    [0.00000000138, 4.45448589312, 3201.1581046605],
    [0.00000000138, 4.81087367911, 3480.5543837061],
    [0.00000000099, 2.15773607989, 6953.6539932677],
    [0.00000000129, 0.22745708157, 4878.60904519429],
    [0.00000000106, 2.17957220226, 3023.9767395597],
    [0.000000001, 1.77158830078, 8741.79888998789],
    [0.000000001, 1.77158830078, 8742.28652495491],
    [0.00000000101, 3.30035420675, 6534.6569843595],
    [0.000000001, 2.36711969354, 2652.2217613055],
    [0.00000000108, 5.70132621502, 250.1482782257],
    [0.00000000113, 5.46854342462, 13937.0383226175],
    [0.000000001, 5.39233849058, 3340.77168022831],
    [0.000000001, 0.73142842806, 3340.9408081383],
    [0.00000000098, 6.11395858344, 6144.1765238207],
    [0.00000000104, 2.06636969565, 11526.88127170889],
    [0.00000000099, 1.0704966008, 5312.80841803811],
    [0.00000000113, 0.61738035609, 10080.9673245295],
    [0.00000000107, 2.59063501509, 6680.9137256133],
    [0.00000000095, 4.93046121541, 8425.40702033129],
    [0.00000000095, 4.56982042451, 3310.9742005731],
    [0.00000000095, 4.69553914772, 3370.7382877935],
    [0.00000000098, 4.50493848722, 18616.82448356369],
    [0.00000000095, 0.79771279792, 4783.1347065957],
    [0.00000000096, 5.71058433425, 1353.1467105243],
    [0.000000001, 4.98384210374, 3340.9063008339],
    [0.000000001, 1.1399248149, 3340.80618753271],
    [0.00000000112, 5.73113213169, 5084.86190393429],
    [0.00000000098, 5.27414574207, 7277.64704489211],
    [0.00000000097, 6.16604306709, 12509.00950756369],
    [0.000000001, 5.37057272396, 1755.2278671956],
    [0.00000000098, 2.55063075141, 1784.2880972279],
    [0.00000000129, 4.50770814605, 4591.6864404841],
    [0.00000000098, 4.36330521693, 4981.70181941289],
    [0.000000001, 0.88244732253, 6474.7679335865],
    [0.00000000125, 3.41428539212, 30228.2222939139],
    [0.00000000102, 4.70479717845, 2214.98690507971],
    [0.00000000092, 3.28323563949, 1383.13116433011],
    [0.00000000101, 4.40159342227, 3302.2355735785],
    [0.000000001, 2.64848792786, 13517.55897844709],
    [0.00000000096, 5.28550942561, 16975.9789083341],
    [0.00000000096, 1.50961429884, 34114.8702517911],
    [0.00000000118, 0.67935665521, 3343.8251895999],
    [0.00000000118, 2.30281760984, 3337.88729876671],
    [0.00000000105, 5.50998714425, 42389.1787537905],
    [0.00000000118, 0.33297168104, 2524.20291796811],
    [0.00000000114, 1.85606000482, 947.95147041809],
    [0.00000000102, 5.06357443797, 27946.9917974033],
    [0.00000000103, 4.21339332479, 20235.36664379391],
    [0.00000000094, 1.77869076759, 11507.0135872771],
    [0.00000000118, 3.61771545773, 3284.47305810711],
    [0.00000000118, 5.6476441145, 3397.2394302595],
    [0.00000000115, 1.48299242949, 640.6337898987],
    [0.00000000104, 0.07874415195, 3149.4252317239],
    [0.00000000104, 6.04497292118, 3532.2872566427],
    [0.00000000091, 0.29342992971, 24093.03297169169],
    [0.00000000093, 2.25704229812, 987.9900904115],
    [0.00000000093, 3.19860248214, 1957.4812623697],
    [0.00000000116, 5.06230565784, 49225.8240066243],
    [0.00000000099, 1.45477069665, 6489.53276980449],
    [0.00000000113, 3.26669234129, 2597.86618365071],
    [0.00000000107, 1.04892077554, 1744.66980189871],
    [0.00000000094, 5.35074037672, 3334.72301825071],
    [0.00000000094, 3.91461919551, 3346.9894701159],
    [0.0000000009, 0.9661379181, 15747.0167950119],
    [0.00000000091, 2.71602822239, 50818.4200202571],
    [0.00000000108, 2.01528048558, 1971.70835637129],
    [0.00000000111, 4.02376942461, 27417.3008323087],
    [0.00000000104, 5.13876361969, 441.06910236111],
    [0.00000000089, 0.7661932285, 3313.38737778371],
    [0.00000000089, 2.21598103655, 3368.3251105829],
    [0.00000000103, 6.19901188761, 1059.6930579755],
    [0.00000000112, 4.36311428624, 1744.73711220151],
    [0.00000000092, 1.76217757007, 32509.4527904245],
    [0.000000001, 5.4284799377, 10611.14592459111],
    [0.00000000112, 6.05049937833, 10721.3522458105],
    [0.000000001, 4.15719372404, 309.0345051723],
    [0.00000000105, 4.65669488804, 24606.3793707035],
    [0.00000000095, 2.41537501026, 529.86747227531],
    [0.0000000012, 1.39317335094, 3202.33874731261],
    [0.0000000012, 1.58900091411, 3479.373741054],
    [0.00000000086, 2.34324816413, 2918.82880302731],
    [0.00000000086, 0.63892610092, 3762.8836853393],
    [0.00000000099, 3.62602219574, 3458.6690470753],
    [0.00000000099, 5.63933737649, 3223.0434412913],
    [0.00000000089, 3.31586686845, 22531.3344226301],
    [0.00000000107, 5.2623265234, 3311.87461420391],
    [0.00000000107, 4.00303304883, 3369.83787416271],
    [0.0000000009, 4.95245301445, 4670.36833444331],
    [0.00000000094, 3.52526410634, 796.5245706477],
    [0.00000000085, 4.38880338786, 809.2336519635],
    [0.00000000084, 4.57429862732, 4778.03185838191],
    [0.00000000118, 0.22160767097, 8219.22147189409],
    [0.00000000104, 4.33115782764, 3149.3907244195],
    [0.00000000104, 1.79255924549, 3532.3217639471],
    [0.00000000084, 2.6554797349, 1125.62552162009],
    [0.00000000085, 1.24355302775, 4555.6585738067],
    [0.00000000116, 0.77903465821, 14694.7484118235],
    [0.00000000086, 1.37625658794, 12410.9751180321],
    [0.00000000084, 2.20272544801, 1106.89498820129],
    [0.00000000117, 1.12167690201, 30774.2578250913],
    [0.0000000009, 4.84535420677, 32366.8538387241],
    [0.00000000091, 0.58267443363, 9161.7711688301],
    [0.00000000089, 1.52114958439, 3348.53003615871],
    [0.00000000089, 1.46102468066, 3333.1824522079],
    [0.00000000093, 3.90251764282, 9225.29545579949],
    [0.00000000102, 4.7375625585, 4466.72558328691],
    [0.00000000102, 1.59596990491, 4466.2379483199],
    [0.00000000099, 2.08209672992, 4879.0966801613],
    [0.00000000086, 2.48786705786, 3613.0415665679],
    [0.00000000083, 2.77680182693, 7899.30648388849],
    [0.00000000082, 6.02206548524, 1265.32366114289],
    [0.00000000084, 2.49874468506, 2942.7745510779],
    [0.00000000083, 2.13736601614, 3077.28468584349],
    [0.00000000082, 2.21746232443, 3351.42559923031],
    [0.00000000082, 0.76471194062, 3330.2868891363],
    [0.00000000112, 3.24551167664, 14900.9339602607],
    [0.00000000082, 2.15484008375, 22318.03532719209],
    [0.00000000084, 4.77917502205, 3597.8742519263],
    [0.00000000084, 4.48618455018, 3083.8382364403],
    [0.00000000082, 1.35034038247, 1552.2237124961],
    [0.00000000095, 2.00687862342, 530.0020928809],
    [0.00000000081, 2.73020648895, 2980.2578272547],
    [0.00000000085, 0.15610612016, 1056.1026293237],
    [0.00000000097, 1.61255624836, 4447.9950498681],
    [0.00000000084, 2.96706110524, 845.8390172677],
    [0.00000000114, 2.85738890734, 3063.8212504419],
    [0.00000000114, 0.12478535771, 3617.89123792471],
    [0.00000000085, 1.29452650597, 23937.6125722575],
    [0.00000000085, 4.25238937662, 54790.1805074615],
    [0.00000000086, 4.98647530125, 23010.1929284189],
    [0.00000000085, 1.10962056312, 8322.3142461127],
    [0.00000000083, 3.80381782412, 20103.2922395959],
    [0.00000000112, 5.31910031613, 5295.5733945469],
    [0.00000000081, 2.24487635939, 3490.7537193101],
    [0.00000000081, 0.73729790566, 3190.9587690565],
    [0.00000000099, 1.21508005987, 4845.6564183093],
    [0.00000000094, 5.55603573783, 796.5590779521],
    [0.00000000092, 1.95151196671, 4452.4984892853],
    [0.00000000092, 5.0931046203, 4452.0108543183],
    [0.00000000091, 0.1465624457, 2544.54098371471],
    [0.00000000081, 0.07757124603, 7166.9530887057],
    [0.00000000089, 5.72126604208, 6311.7688549427],
    [0.00000000084, 0.49185882297, 4822.2656155285],
    [0.00000000089, 3.02340140636, 4049.8460464599],
    [0.00000000085, 0.12419247098, 14716.0840522905],
    [0.00000000081, 1.13581368137, 34363.12178007249],
    [0.00000000094, 5.59053061063, 24532.73276608469],
    [0.00000000102, 3.18943570469, 3524.7258310853],
    [0.00000000102, 6.07592386754, 3156.9866572813],
    [0.00000000084, 2.90724107191, 2942.63993047231],
    [0.00000000084, 4.3032497965, 4801.9102961297],
    [0.00000000084, 4.20311871432, 78263.95324220609],
    [0.00000000079, 1.90010229816, 4424.1166121203],
    [0.00000000081, 3.35310168176, 3333.72544353031],
    [0.00000000081, 5.91225789047, 3347.98704483631],
    [0.00000000079, 0.61325160212, 4029.49072706111],
    [0.00000000083, 1.86215319352, 24336.2492106327],
    [0.00000000102, 0.51044670726, 3119.9559667775],
    [0.00000000096, 1.45358314071, 3324.02404313351],
    [0.00000000096, 1.52859112434, 3357.6884452331],
    [0.0000000008, 2.69227009829, 12987.86801335249],
    [0.00000000099, 5.59593346094, 3376.4640347671],
    [0.00000000099, 3.66942611129, 3305.24845359951],
    [0.0000000009, 5.64056301828, 18028.2472915225],
    [0.00000000086, 4.08226718914, 3296.20241094311],
    [0.00000000086, 5.18309238309, 3385.5100774235],
    [0.00000000085, 0.33690474046, 3487.65067705471],
    [0.00000000085, 2.64526952459, 3194.0618113119],
    [0.00000000085, 5.64237858602, 1758.8968959003],
    [0.00000000088, 1.846034939, 2751.2589746635],
    [0.00000000082, 5.31753219651, 16460.5773470085],
    [0.00000000101, 0.12565896078, 1162.23088692429],
    [0.00000000079, 1.54738520834, 8186.2688450091],
    [0.00000000097, 3.30698966692, 4025.9676087121],
    [0.00000000077, 4.93338786819, 7446.7741003625],
    [0.00000000077, 1.7917952146, 7447.2617353295],
    [0.00000000077, 2.2767289252, 430.7741616226],
    [0.00000000102, 0.88442764654, 574.5886158183],
    [0.00000000079, 5.30896262392, 1593.2488660304],
    [0.0000000009, 6.20338338719, 12891.88878613469],
    [0.00000000079, 4.62780146592, 101010.75632211348],
    [0.000000001, 1.08134927193, 1481.1655538617],
    [0.00000000106, 3.21478248142, 13.9832765181],
    [0.00000000076, 0.77814474339, 31979.7618253299],
    [0.00000000102, 0.64416843915, 52168.2874299159],
    [0.00000000103, 4.98287803658, 6777.44789810091],
    [0.0000000008, 4.95264640866, 1954.9609678471],
    [0.00000000075, 2.02296081747, 14797.8411860421],
    [0.00000000091, 4.16695567867, 6836.3341250475],
    [0.00000000077, 2.05190836413, 51770.1384265077],
    [0.00000000078, 5.96632605031, 8831.1572057073],
    [0.00000000085, 1.0020463114, 369.4559984569],
    [0.00000000091, 2.17733407719, 2544.5754910191],
    [0.00000000081, 2.52401673663, 3277.1203458799],
    [0.00000000081, 0.45815752842, 3404.59214248671],
    [0.00000000076, 2.28366173471, 10025.11658096489],
    [0.00000000084, 1.0392210096, 45331.6421770821],
    [0.00000000077, 5.30919338072, 1324.6975230565],
    [0.00000000091, 4.40755313323, 45494.33761226529],
    [0.00000000081, 3.60186938439, 3325.11613803129],
    [0.0000000008, 3.36745124689, 569.0656915109],
    [0.00000000075, 0.53983177923, 9090.7180107311],
    [0.0000000009, 1.60142738772, 1747.3635606694],
    [0.00000000073, 2.65616186351, 7476.2314113615],
    [0.00000000091, 0.10088212205, 8536.10097651771],
    [0.00000000091, 3.24247477564, 8535.6133415507],
    [0.00000000102, 3.02727638, 8692.08137235589],
    [0.00000000073, 0.49752926048, 16062.4283436003],
    [0.00000000087, 5.8321623733, 15117.75617404771],
    [0.00000000077, 3.04573883254, 20618.2631760171],
    [0.00000000086, 4.85081525532, 5355.4796989721],
    [0.00000000081, 5.67577359419, 2917.2935366893],
    [0.00000000077, 5.62600904801, 1008.30565339989],
    [0.00000000081, 0.08809861865, 2910.2472999913],
    [0.00000000072, 5.81652451955, 928.08378598631],
    [0.00000000073, 4.57978609101, 6809.4875142205],
    [0.00000000075, 4.6622302327, 4106.1616736627],
    [0.00000000074, 2.51037789906, 30376.10882168309],
    [0.00000000094, 4.31600433309, 17809.95712170029],
    [0.0000000008, 3.70927773647, 6151.8450160913],
    [0.00000000075, 1.66172010069, 81604.56566890588],
    [0.00000000076, 4.72368572998, 44534.85653529869],
    [0.00000000097, 4.28214074273, 5749.61794906429],
    [0.00000000071, 2.42412250787, 9384.59719059169],
    [0.00000000074, 5.57898561678, 6603.7181268992],
    [0.00000000071, 5.34550834972, 14061.9646725103],
    [0.00000000073, 5.34904276015, 13635.3664816343],
    [0.00000000071, 5.7896821137, 5622.1540509967],
    [0.00000000071, 5.87925588598, 23539.8838935135],
    [0.00000000081, 2.95315282923, 19573.6012745013],
    [0.000000001, 2.10255812973, 3399.7424711299],
    [0.00000000075, 1.8327889394, 1214.55851213989],
    [0.00000000094, 1.75965102296, 10816.84383806129],
    [0.00000000071, 5.95705764996, 12140.8449579613],
    [0.00000000072, 2.94505111531, 26887.6098672141],
    [0.00000000072, 5.27569870166, 2010.8565189563],
    [0.00000000072, 2.7609098003, 11560.32153356091],
    [0.00000000072, 3.91771440218, 21957.4369102635],
    [0.00000000071, 2.84795147281, 1619.7537522461],
    [0.00000000074, 0.11394719873, 20205.89737884749],
    [0.00000000075, 1.13246079, 7477.27904273249],
    [0.00000000073, 2.21781912263, 6493.54352312051],
    [0.00000000069, 1.97183985363, 5784.06574185909],
    [0.00000000084, 5.72884329247, 2118.5200428949],
    [0.00000000086, 4.60823055211, 19404.0210913683],
    [0.00000000095, 3.88399746483, 2104.7805838603],
    [0.00000000075, 1.20420559875, 8748.9124369887],
    [0.00000000076, 5.9043544109, 3268.8005108285],
    [0.00000000076, 3.36100516133, 3412.9119775381],
    [0.00000000089, 0.07046438358, 15643.43638582629],
    [0.00000000075, 2.83027542239, 36106.1029037991],
    [0.00000000069, 4.22526525232, 21272.8804910045],
    [0.00000000071, 1.81785521705, 58857.2749540315],
    [0.00000000071, 3.09739469496, 5298.0936890695],
    [0.00000000071, 6.23898734855, 5298.5813240365],
    [0.0000000008, 4.11777412331, 6151.71039548571],
    [0.00000000068, 4.63938903003, 942.3058794525],
    [0.00000000089, 4.89960612432, 30640.1004561165],
    [0.00000000068, 5.87799590803, 11247.4527822533],
    [0.00000000068, 0.82684530792, 8550.32807051931],
    [0.00000000078, 5.32553737695, 422.9098550964],
    [0.00000000068, 3.37824489645, 4665.3099497563],
    [0.00000000068, 0.23665224286, 4665.7975847233],
    [0.0000000007, 1.18575062405, 2332.3067732999],
    [0.0000000007, 4.74024249826, 13105.18788157269],
    [0.00000000071, 0.83016269932, 3309.86425943471],
    [0.00000000071, 2.15201156573, 3371.8482289319],
    [0.0000000008, 4.96945014581, 9705.6892279263],
    [0.00000000079, 2.82952117654, 16065.82204399129],
    [0.0000000007, 2.49836750115, 7843.94337529091],
    [0.00000000068, 5.11241672674, 9175.9982628317],
    [0.00000000081, 0.77055887901, 94329.53146871387],
    [0.00000000067, 5.575814506, 6112.6467968557],
    [0.00000000075, 1.66052000409, 1585.38455950421],
    [0.00000000091, 2.77249023737, 7768.2521571691],
    [0.00000000068, 1.17229514872, 11663.4143077795],
    [0.00000000069, 2.60276940326, 23554.1109875151],
    [0.00000000072, 0.87830980344, 3267.2207809637],
    [0.00000000072, 2.10386446161, 3414.4917074029],
    [0.00000000073, 3.91879555351, 2693.84541086851],
    [0.00000000069, 1.24929360061, 3494.7814777077],
    [0.00000000069, 1.73288066444, 3186.93101065891],
    [0.00000000068, 0.65498506864, 5202.1144618517],
    [0.00000000085, 2.64920255148, 4157.5095703985],
    [0.00000000066, 5.42206372629, 15636.32283882549],
    [0.00000000093, 3.60627494992, 1826.07731249979],
    [0.00000000075, 5.40680087602, 15276.21205686389],
    [0.00000000067, 2.59734357148, 290.24166198609],
    [0.00000000073, 2.308623543, 3237.2758349977],
    [0.00000000066, 2.80946310059, 10823.95738506209],
    [0.00000000066, 5.95105575418, 10824.44502002911],
    [0.00000000066, 3.8788065069, 16056.29511766771],
    [0.00000000066, 3.36268639559, 226.07308589371],
    [0.00000000068, 0.4276487392, 4897.4243911387],
    [0.00000000065, 3.82963818162, 3324.09135343631],
    [0.00000000065, 5.43572139061, 3357.6211349303],
    [0.00000000066, 2.06780245805, 176.44991265029],
    [0.00000000069, 1.3171307541, 1442.03464492889],
    [0.00000000065, 2.23384330119, 12725.20961729149],
    [0.00000000071, 0.81327740269, 11250.55557593809],
    [0.00000000066, 0.93383696418, 415.7963080956],
    [0.00000000066, 3.64037605585, 3738.93793728871],
    [0.0000000009, 1.66801934841, 2885.946877656],
    [0.0000000009, 1.31415491664, 3795.7656107106],
    [0.00000000067, 5.42902273412, 13359.10309563091],
    [0.00000000069, 4.43980027024, 4932.9646228491],
    [0.00000000067, 1.57727720508, 20043.43074271529],
    [0.00000000067, 3.84155718574, 19247.6203708659],
    [0.00000000064, 1.06581237341, 8983.0544867925],
    [0.00000000081, 5.58958887514, 5136.1146879043],
    [0.00000000076, 6.10249673727, 6677.53651762],
    [0.00000000064, 0.33226555661, 6564.1488026629],
    [0.00000000063, 2.10390607796, 10294.2664199675],
    [0.00000000063, 5.24549873155, 10294.7540549345],
    [0.00000000065, 5.5680908894, 0.7365035847],
    [0.00000000067, 0.73015466933, 4396.71505602351],
    [0.0000000007, 4.18413149495, 5088.46362233621],
    [0.0000000007, 1.04253884136, 5087.97598736919],
    [0.00000000066, 3.51965735519, 3332.68810760091],
    [0.00000000066, 5.74570221704, 3349.02438076571],
    [0.00000000069, 3.86382217258, 24076.6884056089],
    [0.00000000063, 4.2229706716, 15004.0267344793],
    [0.00000000066, 4.86919893241, 3303.8606535723],
    [0.00000000066, 4.39616063982, 3377.85183479431],
    [0.00000000062, 0.97042406466, 423.3188900105],
    [0.00000000073, 1.49145392699, 7250.29054491051],
    [0.00000000066, 2.4869775567, 1083.01655045349],
    [0.00000000066, 3.23187966901, 3739.0725578943],
    [0.00000000065, 3.95948324523, 3454.58568375171],
    [0.00000000065, 5.305876327, 3227.1268046149],
    [0.00000000069, 2.59648260174, 5885.1879177189],
    [0.00000000069, 5.75230198725, 2384.56708821271],
    [0.00000000082, 3.81994976939, 6573.8051469445],
    [0.00000000078, 5.28528678757, 12979.79699205951],
    [0.00000000063, 5.02148754857, 6298.0845036929],
    [0.00000000063, 4.29059352218, 379.12959639069],
    [0.00000000078, 0.06919505661, 17079.0716825527],
    [0.00000000063, 5.55828474147, 4295.6101338159],
    [0.00000000072, 2.77553583313, 7366.5127251091],
    [0.00000000064, 1.22906259266, 21258.6533970029],
    [0.00000000061, 5.82279175439, 3870.52995562571],
    [0.00000000069, 2.31182487954, 6757.7347421587],
    [0.00000000061, 1.57037807871, 3870.5644629301],
    [0.00000000061, 2.32660945835, 8528.49979454989],
    [0.00000000072, 1.46495213208, 3337.95522989351],
    [0.00000000072, 1.51722213297, 3343.7572584731],
    [0.00000000081, 4.85945415811, 17498.5563264279],
    [0.0000000008, 4.09102247218, 68241.62832713968],
    [0.0000000007, 1.267691047, 5096.3279288624],
    [0.0000000007, 4.40928370059, 5095.8402938954],
    [0.00000000062, 3.77365809945, 629.0954035336],
    [0.00000000061, 4.23156701226, 7056.74676748629],
    [0.00000000061, 2.12062311073, 27035.49639498329],
    [0.00000000075, 5.58983904787, 13531.78607244869],
    [0.00000000062, 1.40905160179, 14591.16800263789],
    [0.00000000062, 4.55064425538, 14591.6556376049],
    [0.00000000071, 6.19817850055, 5622.01943039111],
    [0.00000000066, 0.70285666709, 954.9977071161],
    [0.00000000068, 4.29528632626, 3930.4535137031],
    [0.00000000066, 1.57540103682, 2899.54332433869],
    [0.00000000061, 2.92470112475, 2711.51702316619],
    [0.00000000063, 2.75001640915, 2125.5662795929],
    [0.00000000073, 6.02852675275, 6695.6957648847],
    [0.00000000069, 0.56571097024, 5885.15341041451],
    [0.0000000006, 3.57090765756, 41427.24316569529],
    [0.0000000008, 2.1865234063, 4576.44426953929],
    [0.0000000008, 5.32811605989, 4576.9319045063],
    [0.00000000059, 0.92319299629, 9374.58262930109],
    [0.00000000074, 3.32088958533, 3583.0972131903],
    [0.00000000082, 4.24713604667, 2636.7354245989],
    [0.00000000058, 3.21277912522, 720.89541372269],
    [0.00000000058, 3.21277912522, 721.3830486897],
    [0.00000000059, 2.00330526657, 14319.44721987369],
    [0.00000000065, 2.85461191452, 48274.1056003737],
    [0.00000000058, 2.9402390395, 110.9428248041],
    [0.00000000072, 3.25665693297, 195.21520194411],
    [0.00000000059, 1.03271362744, 13738.4592558529],
    [0.00000000063, 2.63685401817, 9722.9547033137],
    [0.0000000008, 6.03050339434, 3304.2076812538],
    [0.0000000008, 3.23485617788, 3377.5048071128],
    [0.00000000058, 0.73211712408, 16070.5222116693],
    [0.0000000007, 4.06333381597, 11787.8477230005],
    [0.00000000062, 3.37913079081, 4558.6940571887],
    [0.00000000076, 0.42812166341, 1612.70751554809],
    [0.00000000071, 2.87138479505, 6486.4972864225],
    [0.00000000062, 0.38524528784, 437.8877086234],
    [0.00000000059, 3.33501995812, 37057.33367508269],
    [0.0000000007, 1.22310296909, 8116.1286976755],
    [0.00000000058, 1.38401229102, 1969.4444807273],
    [0.00000000058, 1.59816197403, 4712.26800763931],
    [0.00000000057, 2.80514625199, 4565.7402938867],
    [0.00000000065, 3.23325458609, 5526.1075134761],
    [0.00000000072, 1.75331960583, 8948.4720733921],
    [0.00000000059, 4.01427864314, 22854.8398392875],
    [0.00000000074, 0.4553694041, 3192.28988479],
    [0.00000000074, 5.73581209791, 3189.3209393734],
    [0.00000000074, 1.18271789974, 5106.1352346339],
    [0.0000000006, 3.98760857931, 3333.2775649737],
    [0.0000000006, 5.27775099292, 3348.4349233929],
    [0.00000000057, 2.42715474002, 1022.5327474015],
    [0.00000000062, 5.31656329809, 792.53107098389],
    [0.00000000055, 5.92010875776, 3355.5935265089],
    [0.00000000055, 3.34525081447, 3326.11896185771],
    [0.00000000057, 3.55845650996, 3973.1523485295],
    [0.00000000057, 2.89164664491, 15842.9960222297],
    [0.00000000071, 4.64519741711, 418.26050532349],
    [0.00000000061, 5.33074649278, 223.1041404771],
    [0.00000000063, 5.97450695245, 4137.1715046519],
    [0.00000000067, 0.28907282931, 11240.4065455553],
    [0.00000000055, 0.37389864441, 25665.7613008927],
    [0.00000000076, 2.93332951447, 33716.72124838289],
    [0.00000000061, 2.45900432418, 7630.64427985291],
    [0.00000000065, 3.96741643938, 14267.66258598049],
    [0.00000000065, 0.82582378579, 14268.1502209475],
    [0.0000000006, 4.38893033458, 1368.4164353615],
    [0.00000000061, 4.63971906183, 1118.9996095863],
    [0.00000000067, 5.86396730577, 13366.2839529345],
];

const X1: &[Term] = &[
    [0.01668487239, 4.16976892466, 0.2438174835],
    [0.00551520815, 5.09364818449, 6681.46867088311],
    [0.00077122404, 5.43227875215, 10022.0810975829],
    [0.00033905789, 5.71116244693, 3340.36860921629],
    [0.00013417687, 2.71465693005, 3340.8562441833],
    [0.00009584524, 5.77057197269, 13362.6935242827],
    [0.00002619567, 3.04292130471, 3337.33312583431],
    [0.00002615345, 6.22267850729, 3344.3793625323],
    [0.00001454057, 6.00537388308, 6680.98103591609],
    [0.00001163163, 6.10878130495, 16703.3059509825],
    [0.00000900588, 3.31444263639, 1059.6257476727],
    [0.00000429589, 2.75628228081, 2942.7072407751],
    [0.00000388556, 5.95081376697, 5622.08674069391],
    [0.00000380679, 0.22066211311, 3739.0052475915],
    [0.00000394611, 0.19955281144, 6684.9917892321],
    [0.00000336947, 5.21225980605, 3149.4079780717],
    [0.00000333888, 2.45815226028, 3185.43584474911],
    [0.00000318443, 4.05173927787, 3532.3045102949],
    [0.00000317603, 0.52499208882, 3496.2766436175],
    [0.00000312062, 4.23079808787, 2544.5582373669],
    [0.00000285965, 4.60046760581, 796.5418242999],
    [0.00000259967, 5.02487716401, 4137.1542509997],
    [0.00000205452, 3.2017203463, 1194.6908277081],
    [0.00000140526, 0.16384177624, 20043.9183776823],
    [0.0000015918, 3.57652346172, 1589.3167127673],
    [0.00000133487, 4.63998807852, 5885.1706640667],
    [0.00000132246, 3.70031751325, 4400.2381743725],
    [0.0000012694, 2.82015450407, 6677.9455525341],
    [0.00000102941, 6.05722597437, 5487.0216606585],
    [0.00000128977, 1.79935813905, 1592.8398311163],
    [0.00000101403, 5.54137030567, 3339.8759231151],
    [0.00000101343, 3.72398711211, 3341.83656525151],
    [0.000000896, 5.87965689031, 3870.54720927791],
    [0.00000084159, 0.39524478086, 1990.9888345245],
    [0.00000093032, 0.00825302856, 10021.5934626159],
    [0.00000079379, 3.91303424877, 426.8420083595],
    [0.00000077187, 0.64135737142, 7079.61767429131],
    [0.00000081451, 5.6655193202, 5092.3957755993],
    [0.00000091218, 5.63424494104, 2146.4092339587],
    [0.00000063951, 5.27338440626, 2389.1378379327],
    [0.00000057311, 0.50275055126, 10025.6042159319],
    [0.00000056935, 1.93125711419, 3098.1276402093],
    [0.00000075514, 3.61046388189, 4535.3032544079],
    [0.00000055567, 1.21839855581, 9492.3901324883],
    [0.00000072076, 1.18180609896, 5088.8726572503],
    [0.00000052967, 1.04882176228, 3583.5848481573],
    [0.00000053267, 2.58802816719, 4690.7236538421],
    [0.00000070583, 3.86667384573, 2787.2868413409],
    [0.00000057299, 0.33406941177, 7.3573644843],
    [0.00000054075, 2.75074198097, 2957.9597119601],
    [0.00000050146, 4.61860820816, 191.2044486281],
    [0.00000046293, 3.9942798611, 4292.5746504339],
    [0.00000049234, 2.50739423398, 6681.45141723091],
    [0.00000058634, 5.40086631171, 3894.4256470257],
    [0.00000048264, 0.23146545625, 3723.7527764065],
    [0.00000049234, 4.53816586556, 6681.4859245353],
    [0.00000055021, 1.11115546675, 155.17658195069],
    [0.00000047402, 5.64225040832, 6490.0204047715],
    [0.00000039275, 1.77443036655, 1747.7725955835],
    [0.00000037297, 0.06860934281, 3554.1553396213],
    [0.00000036066, 2.88742336978, 3127.5571487453],
    [0.00000035298, 2.80382718345, 6526.04827144891],
    [0.00000033577, 0.36673291911, 2145.92159899169],
    [0.00000032981, 5.07340957623, 3333.7426971825],
    [0.00000030372, 0.75673237899, 1748.2602305505],
    [0.00000039114, 5.37767054154, 7477.7666776995],
    [0.0000002943, 5.34497951848, 6254.8704800071],
    [0.00000029559, 4.58393732854, 951.4745887671],
    [0.00000028511, 5.98947307886, 553.32558535889],
    [0.00000027567, 3.74859884789, 12303.3115940935],
    [0.00000027467, 2.19208047399, 4933.4522578161],
    [0.0000002813, 4.24458535882, 3347.96979118411],
    [0.00000034806, 3.17911079826, 1349.62359217529],
    [0.00000024557, 3.16432663502, 2811.1652790887],
    [0.00000024445, 6.22731125031, 1066.7392946735],
    [0.0000002923, 2.65841667918, 640.1411037975],
    [0.00000021272, 3.84506725342, 4929.92913946711],
    [0.00000024027, 0.74730655765, 382.6527147397],
    [0.00000024805, 3.86501438648, 2119.00767786191],
    [0.00000019016, 0.62486368468, 242.97242145751],
    [0.00000018321, 0.60915509257, 9623.9320941747],
    [0.00000017069, 2.30803476254, 3320.50092478451],
    [0.00000016952, 0.67381702286, 3361.2115635821],
    [0.00000016989, 0.50197441357, 23384.5308043821],
    [0.00000016214, 0.58543208283, 6681.40136058031],
    [0.00000016696, 5.51495886637, 2281.4743139941],
    [0.00000016004, 0.45066540723, 1052.51220067191],
    [0.00000017047, 2.70239305232, 6674.3551238823],
    [0.0000001459, 1.92122996858, 10018.5579792339],
    [0.00000016713, 0.6689253957, 7211.1596359777],
    [0.00000017707, 4.03769647872, 7740.8506010723],
    [0.00000016047, 4.24883931225, 3325.6037729983],
    [0.00000015961, 5.01645836303, 3356.10871536831],
    [0.00000016214, 0.17693569958, 6681.5359811859],
    [0.0000001378, 1.54940676591, 12833.00255918811],
    [0.0000001463, 0.50614270793, 2273.8731320263],
    [0.00000012478, 4.09396331041, 6682.44899195131],
    [0.00000012677, 0.77220148195, 5331.6012612243],
    [0.00000013489, 0.04091965178, 2288.1002260279],
    [0.00000015563, 5.36370101191, 4562.70481050471],
    [0.00000013052, 4.4916638764, 3767.4544350593],
    [0.00000011294, 2.16352014717, 1350.1112271423],
    [0.00000011234, 2.31197110602, 6438.7400669091],
    [0.00000012654, 5.55709903692, 529.44714761109],
    [0.00000012118, 1.9235360151, 537.0483295789],
    [0.00000011323, 2.4581773941, 522.8212355773],
    [0.000000103, 3.95714627958, 7875.91568110771],
    [0.0000001051, 3.03392108066, 5614.9731936931],
    [0.00000012502, 1.00420796908, 10420.23010099111],
    [0.00000010338, 4.87546518042, 10022.0983512351],
    [0.00000008834, 1.54079392488, 3205.7911641479],
    [0.00000009393, 0.60719486474, 6836.8890703173],
    [0.00000011331, 0.31834272198, 6041.5713845691],
    [0.00000008381, 1.44095675543, 3475.92132421871],
    [0.00000009243, 0.29804306221, 529.9347825781],
    [0.00000010338, 2.84469357959, 10022.06384393071],
    [0.0000000785, 4.26599008644, 2700.4713229023],
    [0.00000008102, 0.82050642338, 13366.21664263171],
    [0.0000000747, 3.66222275723, 397.9051859247],
    [0.00000007391, 4.07636898152, 15643.9240207933],
    [0.00000007798, 4.21954637832, 6127.8992680407],
    [0.00000007318, 3.76030403702, 1751.2957139325],
    [0.00000007398, 0.83000682555, 2942.21960580809],
    [0.00000007, 0.67061782231, 3343.8917275653],
    [0.00000006961, 2.51913263895, 5629.2002876947],
    [0.00000007023, 0.2843672267, 13362.2058893157],
    [0.0000000681, 3.62419194021, 4690.23601887509],
    [0.00000006681, 4.6124215795, 3178.38960805111],
    [0.00000006243, 3.10320630386, 6298.57213865991],
    [0.00000006294, 4.65274248196, 3503.3228803155],
    [0.00000006358, 5.59134148149, 3316.97780643551],
    [0.00000007854, 5.63695074863, 5729.7502646325],
    [0.00000006174, 2.2315842433, 5088.3850222833],
    [0.00000006298, 3.67401727587, 3364.7346819311],
    [0.00000006734, 6.0257930332, 9830.6328314713],
    [0.0000000759, 4.92016746886, 8962.6991673937],
    [0.00000006074, 5.14201333067, 6151.7777057885],
    [0.00000007279, 0.63824331472, 6894.76776632111],
    [0.00000006015, 1.64381432255, 853.4401992355],
    [0.00000005586, 5.72111629827, 10818.3791043993],
    [0.00000005539, 0.9770467944, 1758.40926093329],
    [0.00000005309, 4.22207781323, 2648.6986429565],
    [0.00000006531, 5.82376804487, 6680.4883498149],
    [0.00000005498, 1.38930771941, 6924.1972748571],
    [0.0000000507, 6.24979955975, 1596.43025976811],
    [0.00000004841, 0.45977971146, 6158.8912527893],
    [0.00000005011, 3.60259248893, 433.9555553603],
    [0.00000005999, 5.01730803001, 2280.98667902709],
    [0.00000004334, 0.94400971144, 12964.5445208745],
    [0.00000005929, 5.59565118419, 796.0541893329],
    [0.00000004781, 1.0420300749, 6144.6641587877],
    [0.00000004633, 4.21476805887, 2914.2580533073],
    [0.00000004948, 4.14593775556, 213.0552779545],
    [0.0000000397, 0.34201182432, 3312.4070567155],
    [0.00000004094, 1.37911547191, 2810.6776441217],
    [0.00000003913, 2.63739420106, 3369.3054316511],
    [0.0000000387, 5.50156644179, 641.12142486571],
    [0.00000004135, 5.0213873291, 4033.0138454101],
    [0.00000005101, 5.02688997011, 4292.0870154669],
    [0.00000003721, 4.59533823527, 3346.3791684907],
    [0.00000003721, 4.67002133696, 3335.3333198759],
    [0.00000004814, 4.6407861148, 6688.5822178839],
    [0.00000003684, 3.92161821873, 5621.5991057269],
    [0.00000003561, 2.53539651638, 8274.0646845159],
    [0.00000004122, 3.14545069009, 9866.66069814871],
    [0.00000003629, 1.25761657663, 3304.8283775059],
    [0.00000004333, 1.753537005, 6.86972951729],
    [0.00000004795, 3.57148917867, 951.9622237341],
    [0.00000003622, 5.9977743931, 1582.2031657665],
    [0.00000003577, 1.72457610482, 3376.88411086071],
    [0.00000004037, 5.59805067484, 8433.00820229911],
    [0.00000003824, 2.99247114805, 8969.8127143945],
    [0.00000003414, 0.51623493472, 10022.1484078857],
    [0.00000004384, 4.08397917912, 11773.6206289989],
    [0.00000004071, 3.45831553278, 3863.4336622771],
    [0.00000003905, 3.45281463337, 8955.58562039291],
    [0.00000004291, 5.71320129335, 2818.2788260895],
    [0.0000000357, 0.88507363603, 1744.1821669317],
    [0.00000003461, 1.44846796079, 7633.1870771337],
    [0.00000003246, 0.50620427647, 149.8070146181],
    [0.0000000316, 3.18977931848, 3980.7535304973],
    [0.00000004113, 5.50708372849, 213.5429129215],
    [0.00000003117, 3.81812196204, 3336.9749088253],
    [0.00000003117, 5.44723761019, 3344.73757954131],
    [0.00000003201, 0.14972615341, 3893.93801205869],
    [0.00000003517, 3.81060565872, 7064.3652031063],
    [0.00000003078, 2.90200490041, 7235.0380737255],
    [0.00000003414, 0.92482016698, 10022.01378728011],
    [0.00000002996, 4.05759423372, 419.72846135871],
    [0.00000003014, 1.27034835453, 10551.7720626775],
    [0.00000003089, 1.78845183673, 13359.1704059337],
    [0.00000003393, 1.79839879835, 3336.8454908673],
    [0.0000000293, 5.25870617721, 2487.1722274643],
    [0.00000002899, 0.10521459121, 155.6642169177],
    [0.00000002868, 4.15178337256, 8270.5415661669],
    [0.00000003341, 0.09875387834, 8031.3360805419],
    [0.00000002771, 5.49404613753, 3.2793008655],
    [0.00000003548, 3.33993922239, 2699.9786368011],
    [0.00000003139, 4.06806080343, 5459.6201045617],
    [0.00000002993, 6.05593455661, 3.76693583251],
    [0.00000002558, 5.45850946255, 7632.6994421667],
    [0.00000002973, 1.40668693913, 398.3928208917],
    [0.00000002555, 4.97943235904, 553.8132203259],
    [0.00000002436, 1.11031101787, 3723.26514143949],
    [0.00000003398, 3.58689364383, 9225.7830907665],
    [0.00000002528, 5.78755929713, 3333.8100074853],
    [0.00000002381, 4.54326140537, 1221.6047488379],
    [0.00000002367, 5.24552499745, 8429.4850839501],
    [0.00000002452, 0.21632651454, 2766.5114458485],
    [0.00000003001, 5.91830671191, 3981.73385156551],
    [0.00000002325, 0.86902446422, 9382.18381126891],
    [0.00000003095, 1.72392494967, 6283.3196674749],
    [0.00000002582, 2.98943082072, 5085.2822285985],
    [0.00000002407, 0.81452071345, 9808.78200214491],
    [0.00000002189, 0.31848733903, 4407.3517213733],
    [0.00000002276, 4.18243740519, 1194.2031927411],
    [0.00000002512, 1.88451079218, 16173.6149858879],
    [0.00000002182, 5.33696085883, 1751.7833488995],
    [0.00000002219, 4.06490625389, 8030.8484455749],
    [0.00000002433, 4.37190902188, 11081.46302777211],
    [0.00000002433, 1.32659636118, 5828.2722891311],
    [0.00000002109, 3.63361421871, 15114.2330556987],
    [0.00000002719, 3.70485969332, 6468.1695754451],
    [0.00000002025, 2.7726624979, 3915.2010425181],
    [0.00000001887, 0.17014232268, 76.50988875911],
    [0.00000001853, 1.81086841675, 6151.2900708215],
    [0.00000001844, 2.7895493295, 1692.40948698591],
    [0.00000002127, 3.21512647219, 3347.90248088131],
    [0.00000001808, 3.7476987378, 6040.5910635009],
    [0.00000001865, 1.35270983937, 13760.8425276909],
    [0.00000001998, 6.12517040311, 5084.7945936315],
    [0.00000001821, 3.24689091699, 5099.50932260011],
    [0.0000000197, 5.21835467754, 8827.6340873583],
    [0.00000001948, 5.63032630522, 5099.0216876331],
    [0.00000001717, 5.21576113138, 13362.7107779349],
    [0.00000001785, 2.44739830297, 6660.6932753907],
    [0.00000001744, 1.79434895453, 6816.53375091851],
    [0.00000001717, 3.18498950602, 13362.6762706305],
    [0.00000001955, 3.63998937844, 191.6920835951],
    [0.00000001839, 5.31098518915, 220.6564599223],
    [0.00000001739, 3.64901391277, 3281.4823822697],
    [0.00000002059, 0.84035144431, 26725.1432310819],
    [0.00000001828, 5.65900245619, 6247.7569330063],
    [0.00000002136, 1.71869001756, 6872.91693699471],
    [0.00000001698, 5.61638598924, 3400.23010609691],
    [0.00000001534, 3.28685934658, 574.10098085129],
    [0.00000001533, 3.0362502018, 3877.6607562787],
    [0.00000001541, 1.53159919865, 3495.78900865049],
    [0.00000001628, 4.45153470681, 10023.06141865111],
    [0.00000001807, 5.3705917526, 6696.72114206811],
    [0.00000001767, 2.6499118013, 6661.11335148431],
    [0.00000001525, 5.9715344399, 206.42936592071],
    [0.00000001957, 0.5766723193, 7234.5504387585],
    [0.00000001381, 4.29497602044, 11216.5281078075],
    [0.00000001688, 4.89795336991, 7108.06686175911],
    [0.00000001517, 5.15570920014, 3340.38586286849],
    [0.00000001506, 3.9158954143, 8440.1217492999],
    [0.00000001379, 1.26307005719, 3127.0695137783],
    [0.0000000136, 2.27637695603, 3074.24920246151],
    [0.00000001516, 3.12494539721, 3340.3513555641],
    [0.00000001302, 4.55773751868, 6666.2161996981],
    [0.00000001588, 1.1138622642, 8672.21368792411],
    [0.00000001305, 0.97554659415, 6701.8239902819],
    [0.00000001529, 0.56980933613, 3547.0417926205],
    [0.00000001317, 1.45792516402, 7063.87756813929],
    [0.00000001316, 6.26946114201, 8432.52056733209],
    [0.0000000151, 2.38931811093, 3134.67069574611],
    [0.00000001232, 1.35650102913, 1228.7182958387],
    [0.00000001498, 3.04227517263, 10014.9675505821],
    [0.0000000124, 1.97737579625, 6836.40143535029],
    [0.00000001407, 4.40841782051, 18984.5364474931],
    [0.00000001219, 0.70593882337, 3607.46328590511],
    [0.00000001443, 4.48857942604, 1059.1381127057],
    [0.00000001157, 1.2613688025, 110.45013870291],
    [0.00000001195, 0.29423080541, 11371.9485072417],
    [0.00000001173, 1.00908500027, 10575.1628654583],
    [0.00000001175, 1.901252309, 3320.0808486909],
    [0.00000001171, 1.07324612452, 3361.6316396757],
    [0.00000001509, 4.60862746462, 6702.2440663755],
    [0.00000001157, 1.07614409578, 10235.3801930209],
    [0.00000001097, 3.27118145757, 12936.0953334067],
    [0.00000001517, 2.92274898055, 3097.64000524229],
    [0.00000001089, 2.28516107614, 3170.1833735641],
    [0.00000001068, 3.73801386165, 6685.0590995349],
    [0.00000001082, 2.47496216267, 6531.9054737485],
    [0.00000001365, 4.09642340658, 1039.27042827391],
    [0.00000001415, 2.62020577266, 647.25465079831],
    [0.00000001028, 5.3197293021, 6261.9840270079],
    [0.0000000102, 0.69687736418, 3511.5291148025],
    [0.00000001072, 3.31077938125, 6677.8782422313],
    [0.00000000994, 0.71631497535, 2921.37160030811],
    [0.0000000096, 6.15441067021, 383.1403497067],
    [0.00000001295, 1.19205099554, 3738.51761262449],
    [0.00000001081, 3.12534442949, 2906.6568713395],
    [0.00000000958, 0.18373503494, 4989.3030013807],
    [0.00000000985, 3.76783660715, 8425.8946552983],
    [0.00000000957, 3.10714680748, 10575.6505004253],
    [0.00000000922, 4.56395067955, 9468.51169474051],
    [0.00000000997, 2.53736303913, 4562.2171755377],
    [0.00000000918, 0.10711401132, 13171.2452581711],
    [0.00000000929, 5.90027659664, 10973.3118688665],
    [0.00000000902, 0.05631596164, 3561.26888662211],
    [0.00000001212, 5.52073488118, 2804.05173208791],
    [0.00000000887, 2.35910260079, 3760.3408880585],
    [0.00000000876, 1.6929320963, 956.53297345411],
    [0.00000001037, 2.59899224317, 9779.3524936089],
    [0.00000000929, 5.98408419364, 9070.3626913323],
    [0.00000000857, 2.76482019861, 1592.3521961493],
    [0.0000000084, 0.12599209397, 2126.1212248627],
    [0.00000000845, 2.8177630045, 3120.4436017445],
    [0.00000000954, 2.629360524, 2920.8839653411],
    [0.0000000088, 2.47516322984, 3313.45468808651],
    [0.0000000101, 1.04761636483, 3253.5480396435],
    [0.00000001124, 1.69207540981, 10973.7995038335],
    [0.0000000087, 0.50701374292, 3368.25780028011],
    [0.00000000983, 4.50403465372, 9595.4829067069],
    [0.00000000852, 5.23864143891, 11770.0975106499],
    [0.00000000833, 4.23151062947, 8962.2115324267],
    [0.00000000824, 2.58971694742, 1861.5020351519],
    [0.00000000974, 1.93463517204, 3428.16444872311],
    [0.00000001121, 1.14643572651, 16706.8290693315],
    [0.00000000794, 1.89288433548, 9168.88471583091],
    [0.00000001033, 4.24581346686, 5091.90814063229],
    [0.00000000766, 2.74496789725, 3443.94901840191],
    [0.00000000797, 1.27369538416, 6282.83203250789],
    [0.00000000758, 6.06572380841, 14158.9915310991],
    [0.00000000758, 4.05984927529, 10404.9776298061],
    [0.00000000769, 3.45170944257, 9639.18456535971],
    [0.00000000762, 4.3497573045, 2699.49100183409],
    [0.0000000074, 3.37186639218, 6438.2524319421],
    [0.00000000761, 3.02473744131, 633.0275567967],
    [0.000000008, 4.7915304565, 6519.0020347509],
    [0.00000000725, 3.17644612903, 6475.28312244591],
    [0.0000000073, 3.02102816704, 6709.91785835091],
    [0.00000000766, 6.23897845769, 3148.9203431047],
    [0.00000000795, 1.28741844431, 16305.1569475743],
    [0.00000000701, 0.13673007891, 4569.3307225385],
    [0.0000000075, 6.08088023817, 3297.1373318783],
    [0.00000000762, 3.46520920498, 2544.07060239989],
    [0.00000000695, 5.64254870753, 2700.9589578693],
    [0.00000000688, 5.00398855432, 10029.1946445837],
    [0.00000000923, 2.40915411891, 10177.01386205009],
    [0.00000000737, 3.18449445655, 3384.5751564883],
    [0.00000000674, 2.97028549448, 2807.6421607397],
    [0.00000000845, 0.83945644325, 9499.5036794891],
    [0.00000000645, 1.31214998001, 1214.4912018371],
    [0.00000000629, 0.28992570288, 3237.7634699647],
    [0.00000000627, 1.11050059243, 13149.3944288447],
    [0.00000000632, 2.81036789867, 6605.2025996075],
    [0.0000000071, 3.89496660928, 6461.0560284443],
    [0.00000000701, 2.59503044929, 3370.2857527193],
    [0.00000000701, 0.38714381576, 3311.4267356473],
    [0.00000000607, 6.17244952085, 949.4194264533],
    [0.00000000603, 2.72434120082, 12566.3955174663],
    [0.00000000605, 4.55268583903, 11243.9296639043],
    [0.00000000719, 3.3979036946, 12310.42514109431],
    [0.00000000585, 3.28767074464, 5827.78465416409],
    [0.00000000622, 5.63029890672, 7903.3172372045],
    [0.00000000633, 5.14454720349, 691.9137837433],
    [0.00000000601, 3.81540155391, 9778.8648586419],
    [0.0000000058, 0.54616275524, 16702.81831601549],
    [0.00000000598, 2.15895090295, 3340.8734978355],
    [0.00000000587, 2.84018169062, 13517.62628874989],
    [0.00000000646, 5.77534161373, 2111.8941308611],
    [0.00000000592, 4.73533629827, 2301.8296333929],
    [0.00000000598, 0.12817703817, 3340.83899053111],
    [0.00000000551, 4.2121817142, 2693.3577759015],
    [0.00000000544, 1.97116952941, 16699.7828326335],
    [0.00000000623, 1.72895571381, 10264.80970155691],
    [0.00000000539, 0.82048737136, 3490.4194413179],
    [0.00000000568, 2.68750434726, 1437.41943168211],
    [0.00000000557, 0.85462599459, 13362.7608345855],
    [0.0000000053, 2.83578333137, 4555.59126350391],
    [0.00000000647, 0.93860283834, 4393.1246273717],
    [0.00000000575, 5.57774190632, 5884.68302909969],
    [0.00000000529, 6.20686668225, 1376.0176173293],
    [0.00000000537, 0.00980371467, 3874.07032762691],
    [0.00000000584, 2.12240201386, 4194.0526259353],
    [0.00000000507, 2.19313676678, 2177.8939048085],
    [0.00000000505, 1.3789743889, 9485.2765854875],
    [0.0000000051, 5.74338619548, 11243.44202893729],
    [0.00000000528, 0.09425635417, 4555.10362853689],
    [0.00000000499, 0.79138578393, 3340.43591951909],
    [0.00000000501, 2.93965768481, 224.5886131854],
    [0.00000000525, 0.9488712115, 6684.5041542651],
    [0.0000000067, 5.94569787504, 6657.59023313531],
    [0.00000000634, 1.62056513361, 242.4847864905],
    [0.00000000513, 4.94013592097, 3233.19272024471],
    [0.0000000049, 4.17557345892, 3774.56798206011],
    [0.00000000634, 3.6988560672, 2707.58486990309],
    [0.00000000613, 4.40032363311, 5989.3110696563],
    [0.00000000492, 4.32515466341, 3448.5197681219],
    [0.00000000616, 5.16594414687, 5642.4420600927],
    [0.00000000555, 3.80576965537, 18454.8454823985],
    [0.00000000463, 1.38847352998, 3229.6696018957],
    [0.00000000507, 5.87248459784, 4136.66661603269],
    [0.00000000477, 3.66215350045, 12296.1980470927],
    [0.00000000462, 1.34104474279, 8827.14645239129],
    [0.00000000444, 3.95877289512, 6705.3471086309],
    [0.00000000549, 3.18688547095, 3333.2550622155],
    [0.00000000443, 1.59367641062, 3452.04288647091],
    [0.00000000557, 1.26314936469, 13362.62621397991],
    [0.00000000437, 1.45419351715, 13915.77529215809],
    [0.00000000498, 1.19917091183, 3340.3012989135],
    [0.00000000424, 5.72891764326, 2301.34199842589],
    [0.00000000433, 4.48268877222, 6843.9353070153],
    [0.00000000494, 3.48540091775, 13207.27312484851],
    [0.00000000402, 1.71994710298, 6571.2623496637],
    [0.00000000453, 3.24616258868, 3184.9482097821],
    [0.00000000413, 4.34476522794, 8800.2325312615],
    [0.00000000407, 6.0818690944, 6048.6849315699],
    [0.00000000488, 2.98211910254, 2222.1004520805],
    [0.00000000556, 0.32985654758, 6034.4578375683],
    [0.00000000421, 4.49869717068, 4379.8828549737],
    [0.00000000472, 0.33931417528, 4937.0426864679],
    [0.00000000392, 5.1349785963, 134.8212625519],
    [0.00000000515, 5.18562869638, 6675.9457465757],
    [0.00000000407, 1.72332746589, 3392.13658204571],
    [0.00000000407, 1.25884679916, 3289.5759063209],
    [0.00000000474, 1.74795831788, 13892.3844893773],
    [0.00000000426, 2.86953666046, 11614.6771112157],
    [0.00000000384, 5.80577939753, 6685.3500062411],
    [0.00000000407, 3.46091021814, 4569.8183575055],
    [0.00000000495, 4.23130410948, 13119.47728534169],
    [0.00000000366, 2.89115269594, 263.3277408563],
    [0.0000000037, 1.36093537897, 3274.36883526891],
    [0.00000000359, 4.24198911604, 5614.48555872609],
    [0.00000000358, 4.3021302661, 7910.4307842053],
    [0.0000000036, 1.62131716357, 3407.3436530977],
    [0.00000000402, 5.43912274152, 7895.7160552367],
    [0.00000000453, 2.09910428652, 3113.3801113943],
    [0.00000000394, 6.09769421438, 9588.3693597061],
    [0.00000000341, 4.58419197314, 15.49628866851],
    [0.00000000341, 4.67783034753, 2384.0794532457],
    [0.00000000358, 1.27303671253, 20.11150191529],
    [0.00000000352, 5.65764885671, 12721.32828193349],
    [0.00000000422, 2.19333082001, 19514.2274125877],
    [0.00000000463, 2.10905707905, 3870.0595743109],
    [0.00000000334, 4.3551872163, 10595.9382609507],
    [0.00000000333, 1.29837025236, 5725.1795149125],
    [0.00000000342, 5.18889491099, 9380.71585523369],
    [0.00000000373, 6.01149621113, 10021.1007765147],
    [0.0000000038, 5.03329108256, 7909.94314923829],
    [0.00000000375, 4.47589680364, 11611.1539928667],
    [0.00000000335, 4.5568737348, 2939.1841224261],
    [0.0000000034, 3.64506451118, 7321.36595719711],
    [0.00000000374, 4.03375047167, 3415.63784275061],
    [0.0000000033, 1.88368883608, 6677.4579175671],
    [0.00000000412, 0.88251814469, 3568.3323769723],
    [0.0000000031, 4.70847967924, 14422.0754544719],
    [0.00000000318, 4.69941081301, 16460.08971204149],
    [0.00000000338, 5.9113134651, 10177.5014970171],
    [0.0000000033, 0.91597037671, 3362.70707350971],
    [0.0000000033, 2.06620388834, 3319.0054148569],
    [0.00000000348, 5.617309623, 9602.5964537077],
    [0.00000000329, 4.94303630669, 10042.8564930753],
    [0.00000000312, 5.55211289042, 323.74923414091],
    [0.0000000034, 4.78508277647, 22325.1488741929],
    [0.00000000403, 4.77937379248, 6040.10342853389],
    [0.0000000039, 2.10755320496, 6717.49653756051],
    [0.00000000324, 3.81410761918, 14584.5420906041],
    [0.00000000298, 0.56258586387, 3417.1223154589],
    [0.00000000291, 1.54713222563, 6645.4408042057],
    [0.00000000293, 3.68939166735, 2676.10019905331],
    [0.00000000332, 6.23779631324, 4459.61203628611],
    [0.00000000279, 3.08511995, 5732.2930619133],
    [0.00000000304, 3.91894030488, 7204.04608897691],
    [0.0000000028, 1.35602318924, 3283.9578692477],
    [0.0000000028, 1.62615107581, 3397.7546191189],
    [0.00000000283, 4.01285717255, 262.84010588929],
    [0.00000000325, 5.23850564888, 3266.074645616],
    [0.0000000028, 3.40896567674, 6688.51490758111],
    [0.00000000284, 0.30082021041, 5244.2930566845],
    [0.00000000363, 2.79281358783, 10001.3057020905],
    [0.00000000267, 0.02468832444, 7255.8134692179],
    [0.00000000348, 1.35684937218, 1990.5011995575],
    [0.00000000329, 5.60955627373, 162.2228186487],
    [0.00000000356, 3.23261573293, 1162.7185218913],
    [0.00000000345, 3.39135824465, 426.3543733925],
    [0.00000000312, 4.00206322359, 7255.3258342509],
    [0.0000000026, 3.24406180206, 11766.5070819981],
    [0.00000000312, 3.7048658095, 3914.71340755109],
    [0.00000000261, 4.36606169264, 1588.82907780029],
    [0.0000000026, 3.19061283477, 11769.6098756829],
    [0.00000000259, 3.13096549005, 5033.0219136857],
    [0.00000000257, 4.58563664538, 205.9417309537],
    [0.00000000253, 1.68968336145, 17101.4549543907],
    [0.00000000253, 3.52319644222, 16703.28869733031],
    [0.00000000253, 1.08133024526, 6948.0757126049],
    [0.00000000278, 6.24540446055, 7322.34627826531],
    [0.00000000255, 3.63050380615, 11780.7341759997],
    [0.00000000282, 1.66208146566, 860.55374623631],
    [0.00000000253, 5.55396848472, 16703.3232046347],
    [0.00000000256, 4.75382802148, 13936.5506876505],
    [0.0000000024, 2.67113783155, 2274.3607669933],
    [0.00000000246, 0.25187790496, 3377.4616094875],
    [0.00000000246, 2.73029636009, 3304.25087887911],
    [0.0000000027, 5.07892919701, 1222.09238380491],
    [0.00000000243, 3.5817987549, 16276.7077601065],
    [0.00000000253, 2.03967667378, 14314.4119305333],
    [0.00000000225, 3.64551843619, 10018.4906689311],
    [0.00000000227, 3.05024629694, 5305.6948710373],
    [0.00000000284, 2.13762517288, 10157.14617761831],
    [0.00000000244, 1.34723380846, 2074.8011305899],
    [0.00000000243, 1.17853314043, 30065.7556577817],
    [0.00000000218, 3.34943504189, 3030.01544531491],
    [0.0000000022, 3.22940204842, 16858.23871544969],
    [0.00000000221, 5.57676911186, 4005.61228931331],
    [0.00000000213, 6.12180241864, 533.45790092711],
    [0.00000000224, 4.07746567192, 10025.6715262347],
    [0.00000000216, 5.71759573965, 10037.33356876791],
    [0.00000000213, 5.27835525808, 10448.6792884589],
    [0.00000000219, 4.37173752188, 23.63462026429],
    [0.00000000218, 6.18590261959, 5641.9544251257],
    [0.00000000211, 3.90230684295, 6944.5525942559],
    [0.00000000215, 4.18957088171, 3212.83740084591],
    [0.00000000234, 0.76565690804, 3185.5031550519],
    [0.00000000212, 1.32558805223, 3553.66770465429],
    [0.0000000027, 6.1478684378, 16061.94070863329],
    [0.00000000214, 6.25312379495, 1545.1101654953],
    [0.00000000213, 2.95953405061, 17925.1545173039],
    [0.00000000206, 1.17842868532, 15663.79170522509],
    [0.00000000201, 1.2832295317, 1835.56843509031],
    [0.00000000211, 5.31180316254, 3230.64992296391],
    [0.00000000198, 0.22514658211, 6578.3758966645],
    [0.00000000204, 0.75052474665, 12323.17927852529],
    [0.00000000204, 5.07567496442, 3468.8750875207],
    [0.00000000213, 0.67647172011, 7747.96414807311],
    [0.00000000197, 4.08128556688, 3340.9235544861],
    [0.00000000221, 2.2167081163, 3496.20933331471],
    [0.00000000193, 5.91467798973, 3651.6970430517],
    [0.00000000191, 0.58881365615, 14712.5609339415],
    [0.00000000242, 3.82869102683, 6622.0948089695],
    [0.00000000191, 5.23241625121, 2480.0586804635],
    [0.00000000188, 2.57440320373, 103.3365917021],
    [0.0000000019, 1.14046863706, 15508.8589407579],
    [0.00000000182, 5.56209368259, 8543.2145235185],
    [0.00000000233, 3.46250833088, 13916.2629271251],
    [0.000000002, 4.07950076032, 6677.5873355251],
    [0.00000000249, 1.6403203946, 699.02733074409],
    [0.00000000237, 1.54894672444, 7373.13863714289],
    [0.00000000202, 1.48932512281, 12012.8261146239],
    [0.00000000205, 1.56629832109, 2946.2303591241],
    [0.0000000023, 0.87749290251, 1903.19299501769],
    [0.00000000239, 0.56550721465, 6107.1238725483],
    [0.000000002, 2.99049384035, 10001.72577818411],
    [0.00000000174, 0.0306410515, 6457.1238751812],
    [0.00000000188, 6.17205698509, 2388.6502029657],
    [0.00000000171, 4.43743888209, 6756.2502694504],
    [0.00000000174, 3.24256094891, 6418.38474751031],
    [0.00000000182, 1.09751490284, 6887.6542193203],
    [0.00000000172, 0.31527807188, 19402.55313533309],
    [0.00000000169, 1.34967221969, 522.3336006103],
    [0.00000000176, 4.11592405892, 7896.20369020371],
    [0.00000000169, 1.19861060296, 5618.5636223449],
    [0.00000000168, 1.47006471713, 13575.9926197207],
    [0.00000000184, 3.93805925267, 7218.2731829785],
    [0.00000000166, 3.82808880048, 15651.03756779411],
    [0.00000000212, 4.80268839794, 13363.67384535091],
    [0.00000000169, 0.37705302403, 2655.8121899573],
    [0.00000000194, 2.09860374727, 9491.90249752129],
    [0.00000000168, 1.3730642527, 7314.2524101963],
    [0.00000000177, 4.60890307799, 3341.3489302845],
    [0.0000000016, 6.16917404327, 1903.6806299847],
    [0.00000000159, 2.63543785839, 2008.8013566425],
    [0.00000000177, 5.21096301825, 6686.9915951905],
    [0.0000000021, 3.08946859688, 4032.52621044309],
    [0.00000000192, 3.2796630336, 2751.79141717511],
    [0.00000000153, 4.89714620461, 2803.56409712089],
    [0.00000000153, 4.40731948478, 3334.1725803092],
    [0.00000000153, 4.85804008745, 3347.53990805741],
    [0.00000000152, 3.30181617069, 5486.53402569149],
    [0.00000000154, 1.98358917407, 3499.7997619665],
    [0.00000000151, 5.12277493842, 14054.36349054249],
    [0.00000000169, 1.72774686313, 19645.7693742741],
    [0.00000000197, 4.49011102737, 3340.78893388051],
    [0.00000000195, 0.42823378367, 6546.4035908477],
    [0.00000000185, 2.81424337458, 1331.8110700573],
    [0.00000000148, 5.02521612753, 14712.07329897449],
    [0.00000000196, 0.33560277948, 8982.5668518255],
    [0.00000000158, 4.60992813529, 14557.1405345073],
    [0.00000000171, 4.49539596939, 1063.14886602171],
    [0.0000000014, 4.7431422017, 2786.7992063739],
    [0.00000000149, 5.05608716763, 13518.1139237169],
    [0.0000000015, 1.03888799126, 736.1203310153],
    [0.0000000014, 0.63946494957, 4039.6397574439],
    [0.00000000148, 3.00259617784, 3053.89388306271],
    [0.00000000141, 5.70073619213, 7380.2521841437],
    [0.00000000187, 4.37697824709, 2409.4931573315],
    [0.0000000014, 0.90450305556, 6692.10533623291],
    [0.00000000171, 3.32683055485, 14.47091148511],
    [0.00000000135, 5.16323033758, 4076.7327577151],
    [0.00000000135, 4.10212923465, 2604.9797306515],
    [0.00000000134, 5.28028126267, 13554.1417903943],
    [0.00000000133, 2.22525164413, 3191.29304704871],
    [0.00000000177, 4.97584254328, 2277.4635606781],
    [0.00000000177, 1.67473064239, 8959.1760490447],
    [0.00000000135, 5.19738274919, 3347.4821562171],
    [0.00000000178, 1.87756312184, 2284.5097973761],
    [0.00000000175, 4.86177792832, 8966.2222857427],
    [0.00000000131, 0.83104395212, 9375.0702642681],
    [0.0000000016, 4.45288273211, 2494.28577446509],
    [0.00000000129, 5.46603984965, 6680.99828956829],
    [0.00000000152, 1.54903747444, 12722.7962379687],
    [0.00000000138, 1.4741849433, 20047.4414960313],
    [0.00000000171, 0.83416282874, 75.0254160508],
    [0.00000000129, 1.71104572673, 4846.1440532763],
    [0.00000000134, 2.62552732791, 4025.9002984093],
    [0.00000000129, 4.40753732369, 11670.5278547803],
    [0.00000000129, 3.43526215532, 6680.9637822639],
    [0.00000000157, 0.45500626871, 9389.2973582697],
    [0.00000000126, 4.78407774469, 6148.2545874395],
    [0.00000000176, 0.06847011749, 21.0192129759],
    [0.00000000169, 1.68451776572, 19004.4041319249],
    [0.00000000155, 5.99614758178, 3929.9210711915],
    [0.0000000015, 4.51700078093, 3077.77232081051],
    [0.00000000133, 1.12151471008, 12840.1161061889],
    [0.00000000137, 5.81509659853, 6674.4224341851],
    [0.00000000129, 3.00992741103, 18606.25512851669],
    [0.00000000146, 0.88857962035, 3284.0529820135],
    [0.00000000146, 2.0935946447, 3397.6595063531],
    [0.0000000013, 2.27123580336, 1505.04399160949],
    [0.00000000133, 6.2635317598, 3627.8186053039],
    [0.00000000125, 2.00888455156, 4672.42349675709],
    [0.00000000124, 1.40431448992, 6594.1604663433],
    [0.00000000135, 0.17263957625, 7902.8296022375],
    [0.00000000147, 2.02223322465, 536.5606946119],
    [0.00000000123, 1.97449162762, 1486.2239385487],
    [0.00000000125, 2.58633115739, 15265.64270181689],
    [0.00000000121, 4.43373574929, 4534.81561944089],
    [0.00000000134, 0.0104929857, 2288.58786099491],
    [0.00000000119, 1.4203802537, 74.53778108379],
    [0.00000000146, 4.3398773462, 1479.11039154791],
    [0.00000000117, 3.63700868579, 3344.36210888011],
    [0.00000000117, 2.48675823285, 3337.3503794865],
    [0.00000000147, 2.64686332853, 6510.7958002639],
    [0.00000000118, 2.6671338079, 3531.81687532789],
    [0.0000000016, 3.48000571787, 3451.0625654027],
    [0.00000000117, 0.45598660135, 3337.31587218211],
    [0.00000000117, 5.66778031729, 3344.3966161845],
    [0.00000000118, 5.77425794908, 9887.0160175475],
    [0.00000000119, 2.86055893849, 15907.0079441661],
    [0.00000000154, 2.03788737462, 3134.1555068867],
    [0.00000000118, 2.90358676347, 3363.62474079271],
    [0.00000000118, 0.07858750158, 3318.08774757391],
    [0.00000000117, 2.6325916237, 3184.4555236809],
    [0.00000000117, 0.34958264135, 3497.2569646857],
    [0.00000000115, 3.42928363203, 6725.18758318811],
    [0.00000000116, 1.31026929252, 5243.80542171749],
    [0.00000000124, 4.75071984619, 2631.86644190671],
    [0.00000000135, 4.74864603951, 3603.9401675561],
    [0.00000000112, 1.39378918277, 9065.7919416123],
    [0.00000000152, 3.41529704725, 1.22413855171],
    [0.00000000127, 5.86796114412, 7366.02509014209],
    [0.00000000119, 0.46273681956, 16511.8576848709],
    [0.00000000113, 4.31237181889, 13745.5900565059],
    [0.00000000155, 2.36789782817, 6155.3008241375],
    [0.00000000115, 4.80039490722, 6997.8605405397],
    [0.00000000114, 4.71044015292, 632.5399218297],
    [0.00000000111, 1.50115320372, 87.55202202331],
    [0.00000000114, 3.09765449003, 3987.86707749811],
    [0.00000000125, 1.31378413061, 5821.1587421303],
    [0.00000000138, 6.15830900546, 2233.71743849851],
    [0.00000000149, 4.65381217458, 7373.62627210991],
    [0.00000000131, 0.53786654009, 6901.8813133219],
    [0.00000000107, 4.29058441705, 2973.63191522091],
    [0.00000000107, 0.28658465594, 4672.91113172411],
    [0.00000000145, 1.00064082557, 2060.5740365883],
    [0.00000000111, 3.72631581546, 6357.9632542257],
    [0.00000000112, 3.97073393136, 2575.0631797369],
    [0.00000000139, 0.94733057212, 3547.5569814799],
    [0.00000000122, 4.41872868475, 3346.71344648291],
    [0.00000000122, 4.84663088748, 3334.99904188371],
    [0.00000000114, 4.59065890561, 931.60690433531],
    [0.00000000112, 1.44715487405, 7079.1300393243],
    [0.00000000108, 1.73727679166, 8584.41784841729],
    [0.00000000141, 4.45396803446, 2907.1445063065],
    [0.00000000139, 6.03004639149, 5518.9939664753],
    [0.00000000115, 4.56654646438, 4399.7505394055],
    [0.00000000103, 0.56675408892, 2487.6598624313],
    [0.0000000014, 6.09857806608, 6670.8320055333],
    [0.00000000105, 3.60113930342, 2957.4720769931],
    [0.00000000102, 1.89951054497, 316.14805217309],
    [0.000000001, 2.58249576503, 17918.0409703031],
    [0.0000000012, 0.00199458528, 3311.3644258799],
    [0.0000000012, 2.98017967977, 3370.34806248671],
    [0.00000000118, 2.40172384456, 6606.6870723158],
    [0.00000000098, 1.31051304917, 17468.6113804619],
    [0.00000000097, 5.18663624065, 8859.60639317511],
    [0.00000000107, 0.39903321622, 2391.1930002465],
    [0.00000000132, 5.74613926898, 3050.3707647137],
    [0.00000000106, 5.77391871927, 2641.5850959557],
    [0.00000000097, 2.1522884706, 22345.0165586247],
    [0.00000000101, 3.76810604314, 10125.1738718015],
    [0.00000000104, 1.92314989559, 4297.14540015391],
    [0.00000000096, 0.92848572409, 2679.62331740231],
    [0.00000000111, 1.28913302911, 10042.4364169817],
    [0.0000000011, 4.68759919971, 2913.7704183403],
    [0.00000000096, 4.84024975949, 10006.8286263979],
    [0.00000000112, 3.79531321228, 11251.04321090511],
    [0.00000000096, 0.08944555474, 59.13004443009],
    [0.00000000108, 1.41251308034, 3735.48212924251],
    [0.00000000092, 4.97016796965, 3708.0805731457],
    [0.00000000097, 3.70144815543, 2922.35192137631],
    [0.00000000127, 4.88627440223, 4272.21933103511],
    [0.00000000117, 5.31775060658, 12168.2465140581],
    [0.00000000116, 1.49729294895, 10213.5293636945],
    [0.00000000115, 3.5205761915, 9815.8955491457],
    [0.00000000093, 3.71897405268, 2772.0343701559],
    [0.00000000104, 2.14819026672, 6033.9702026013],
    [0.00000000091, 2.04346250814, 169.3363656495],
    [0.0000000009, 6.01161563012, 2541.03511901791],
    [0.000000001, 1.66100640202, 26887.6098672141],
    [0.00000000096, 0.19390309418, 640.6337898987],
    [0.0000000009, 2.85101513299, 846.3266522347],
    [0.00000000089, 1.82000345485, 2817.7911911225],
    [0.00000000115, 2.32563511814, 1648.2029397139],
    [0.00000000096, 4.51369552987, 4049.8460464599],
    [0.00000000113, 0.2188305692, 4922.8155924663],
    [0.00000000087, 5.73909456316, 1118.5119746193],
    [0.00000000094, 4.82163973372, 1272.9248431107],
    [0.0000000011, 4.05120684954, 21795.4579090983],
    [0.00000000103, 4.54724340391, 12302.8239591265],
    [0.00000000088, 0.58289504579, 17654.5367222661],
    [0.00000000119, 3.51883656664, 3631.3417236529],
    [0.00000000094, 4.87154048069, 10706.63751684189],
    [0.0000000009, 5.20227178872, 19800.7021387413],
    [0.00000000117, 6.22319339964, 1905.70858242391],
    [0.00000000098, 2.27543509085, 6768.77687542291],
    [0.00000000084, 0.40663774606, 3152.93109642071],
    [0.00000000084, 5.71712518213, 3528.7813919459],
    [0.00000000088, 2.4835950458, 36.84918278771],
    [0.00000000112, 2.1750617401, 11925.03027511709],
    [0.00000000093, 2.83649458406, 2538.4923217371],
    [0.00000000091, 4.87521452246, 10714.23869880971],
    [0.00000000094, 1.69069857507, 6048.1972966029],
    [0.0000000011, 3.42458146112, 21946.86755521649],
    [0.00000000085, 1.408425068, 16490.0068555445],
    [0.00000000097, 0.0383222836, 2170.7803578077],
    [0.00000000094, 6.04928950566, 12943.2088804075],
    [0.00000000088, 3.52169323662, 4040.12739241091],
    [0.00000000107, 1.79263478591, 6286.84278582391],
    [0.00000000082, 4.84136227056, 21548.7185518083],
    [0.00000000081, 0.90487003246, 3355.0833381849],
    [0.00000000081, 2.07730423259, 3326.62915018171],
    [0.00000000085, 5.29390218197, 4106.6493086297],
    [0.00000000082, 4.45108278321, 18208.1061251085],
    [0.00000000101, 3.27831724076, 5628.7126527277],
    [0.00000000079, 3.08021794234, 4778.03185838191],
    [0.00000000083, 5.56389512532, 3759.3605669903],
    [0.00000000081, 5.24671474039, 1442.0173912767],
    [0.00000000079, 4.99629515155, 3302.7232085455],
    [0.00000000079, 4.26906442068, 3378.98927982111],
    [0.00000000109, 5.82044508542, 765.54924696289],
    [0.00000000079, 2.75167670672, 9947.2994990156],
    [0.00000000087, 0.74054571271, 3181.91272640011],
    [0.00000000092, 1.81679365007, 684.8002367425],
    [0.00000000078, 0.54443036545, 4025.4126634423],
    [0.00000000106, 0.39437492385, 7214.68275432671],
    [0.00000000079, 3.24883118288, 5562.7128787803],
    [0.00000000094, 3.86479398938, 1655.3164867147],
    [0.00000000077, 4.3739778132, 42942.7481566329],
    [0.00000000096, 3.10433237844, 4447.9950498681],
    [0.00000000079, 0.57783819707, 1169.83206889211],
    [0.00000000077, 2.05082432743, 4002.0891709643],
    [0.00000000075, 1.45657411241, 4988.8153664137],
    [0.00000000103, 4.88591124475, 6279.7965491259],
    [0.00000000075, 2.93994155162, 6710.8981794191],
    [0.000000001, 2.80459580595, 6654.0671147863],
    [0.00000000075, 3.69701859291, 1106.89498820129],
    [0.00000000085, 4.64963704633, 3031.5779215275],
    [0.00000000085, 4.6157225259, 3650.1345668391],
    [0.00000000102, 4.01749947544, 220.16882495529],
    [0.00000000077, 5.54308532188, 3909.6781182107],
    [0.0000000008, 2.35937385984, 42153.72518556549],
    [0.0000000009, 5.20545196866, 2277.95119564511],
    [0.00000000074, 4.85392128576, 10184.5477337151],
    [0.00000000102, 4.85789296676, 3282.9775481795],
    [0.00000000102, 4.40746660547, 3398.73494018711],
    [0.00000000077, 0.9715075474, 20199.2714668137],
    [0.00000000073, 5.35302732038, 13369.8070712835],
    [0.00000000097, 1.78236800999, 6784.5614451017],
    [0.00000000092, 2.49268078499, 3492.7535252685],
    [0.00000000076, 2.72604775599, 19404.0210913683],
    [0.00000000073, 2.28914210106, 6365.0768012265],
    [0.0000000008, 4.31946976428, 8756.5136189565],
    [0.00000000077, 2.4335879951, 6549.9267091967],
    [0.00000000072, 1.60251649866, 2067.68758358909],
    [0.00000000073, 1.66952560844, 20809.2238071617],
    [0.00000000073, 2.18603588252, 8955.09798542589],
    [0.00000000088, 6.053700754, 11883.8269502183],
    [0.0000000007, 0.54574968829, 6254.38284504009],
    [0.00000000093, 3.37029033662, 10050.5302850507],
    [0.00000000074, 5.10982595496, 12725.20961729149],
    [0.00000000069, 6.03979719075, 1280.0383901115],
    [0.0000000009, 6.03814884327, 10713.75106384269],
    [0.00000000082, 5.40449104981, 5401.18646328809],
    [0.00000000072, 2.91500867928, 18451.3223640495],
    [0.00000000077, 0.47267389836, 5466.7336515625],
    [0.00000000079, 1.60573790161, 3351.9019444472],
    [0.00000000079, 1.37643636344, 3329.8105439194],
    [0.00000000077, 4.93901006797, 15636.8104737925],
    [0.0000000007, 5.75932631153, 2011.3441539233],
    [0.00000000068, 3.77776938096, 9381.2034902007],
    [0.00000000074, 4.22015140549, 25136.0703357981],
    [0.00000000068, 0.23736554031, 6489.53276980449],
    [0.00000000078, 1.87967755594, 3583.0972131903],
    [0.00000000069, 5.04882196655, 11354.1359851237],
    [0.0000000007, 3.84126763579, 25287.47998191629],
    [0.0000000007, 3.95696412828, 35707.4662654239],
    [0.00000000088, 3.09948179111, 3068.1832868317],
    [0.00000000088, 6.1658220298, 3613.52920153491],
    [0.00000000065, 3.39284738601, 15121.3466026995],
    [0.00000000077, 0.99849955209, 14127.99895376209],
    [0.00000000069, 1.59437276472, 43739.0461634493],
    [0.00000000066, 1.03311700868, 5195.48854981791],
    [0.00000000066, 4.17470966227, 5195.0009148509],
    [0.00000000065, 0.76344895489, 6708.8702269799],
    [0.00000000071, 5.1305552715, 10176.94655174729],
    [0.0000000009, 5.15547486786, 6740.84253279671],
    [0.00000000065, 0.1066876482, 4140.6773693487],
    [0.00000000064, 4.35311548094, 9801.6684551441],
    [0.00000000085, 2.97975451165, 43340.8971600411],
    [0.00000000087, 5.05289595532, 9859.6144614507],
    [0.00000000074, 0.32205798976, 10596.4258959177],
    [0.00000000065, 0.93949119244, 6681.0485947895],
    [0.00000000071, 0.13869046417, 4143.2201666295],
    [0.00000000066, 1.89967622669, 3267.2552882681],
    [0.00000000066, 1.08249803836, 3414.4572000985],
    [0.00000000063, 1.22371219128, 6467.68194047809],
    [0.00000000064, 2.27838099501, 3487.66793070691],
    [0.00000000064, 0.70379327004, 3194.0445576597],
    [0.00000000085, 4.60745592882, 10720.8646108435],
    [0.00000000062, 1.44691455296, 35.7840491939],
    [0.00000000062, 1.44691455296, 36.27168416091],
    [0.00000000064, 0.50126921709, 11773.13299403189],
    [0.00000000064, 3.3966417603, 41747.81351144129],
    [0.00000000068, 4.85567854407, 12809.12412144031],
    [0.00000000062, 3.24713366848, 18461.9590293993],
    [0.00000000068, 1.9998637349, 6614.9812619687],
    [0.00000000079, 3.63912822114, 11236.8161169035],
    [0.00000000066, 0.0073968143, 9998.20265983511],
    [0.00000000064, 3.57531615713, 11526.88127170889],
    [0.0000000007, 1.91919982448, 16858.6590401139],
    [0.00000000065, 2.25710269131, 20597.0001455577],
    [0.00000000064, 6.00619877627, 40796.5827401577],
    [0.00000000079, 3.24064854543, 10730.58326489249],
    [0.00000000062, 2.19007422012, 20040.3952593333],
    [0.00000000066, 4.61504680225, 8428.9974489831],
    [0.00000000079, 1.14777889484, 40398.4337367495],
    [0.00000000059, 4.95064610711, 44959.3038585067],
    [0.00000000063, 1.57149098969, 20743.1895259099],
    [0.0000000006, 5.59502027006, 10016.5581732755],
    [0.00000000059, 2.37148961772, 13745.10242153889],
    [0.00000000067, 4.66236805003, 9329.9234963561],
    [0.00000000078, 3.20257989132, 24606.3793707035],
    [0.0000000008, 4.78522853089, 5202.6020968187],
    [0.00000000057, 0.14787405732, 12928.98178640591],
    [0.0000000008, 2.57142552579, 27417.3008323087],
    [0.00000000077, 2.68569752236, 4845.6564183093],
    [0.00000000062, 1.28402834481, 12987.86801335249],
    [0.00000000057, 3.31195041686, 5820.6711071633],
    [0.00000000057, 4.71242438007, 25841.04938475869],
    [0.00000000059, 1.99234809567, 5945.5921573513],
    [0.00000000061, 2.21763600824, 3264.59017290771],
    [0.00000000058, 0.15438737921, 15423.5113783545],
    [0.00000000074, 1.62116168437, 9623.4444592077],
    [0.00000000062, 0.0172965229, 3324.02404313351],
    [0.00000000062, 2.96487774215, 3357.6884452331],
    [0.0000000006, 3.2193570529, 9225.29545579949],
    [0.00000000061, 0.87383375009, 5223.93773728571],
    [0.00000000056, 6.08238895883, 3702.9773809141],
    [0.00000000056, 3.1829706134, 2978.7351074525],
    [0.00000000055, 5.55769169501, 12715.68269096791],
    [0.00000000058, 6.20637133104, 14584.05445563709],
    [0.00000000075, 3.03936450956, 4776.0039059427],
    [0.00000000054, 6.20587218477, 45885.2115799245],
    [0.00000000055, 0.20267751971, 2126.05391455991],
    [0.00000000054, 5.63419925281, 9381.69617630189],
    [0.00000000054, 1.14797661971, 5607.3720117253],
    [0.00000000053, 4.66773371614, 6789.1321948217],
    [0.00000000058, 1.18695310382, 3268.8005108285],
    [0.00000000058, 1.79522116123, 3412.9119775381],
    [0.00000000053, 4.87665472917, 12509.00950756369],
    [0.00000000053, 1.73506207558, 12509.4971425307],
    [0.00000000073, 3.99821780645, 14867.49369840869],
    [0.00000000053, 3.76863341135, 14481.4493163855],
    [0.00000000054, 0.37546635249, 24491.18197509989],
    [0.00000000052, 4.72089853524, 6813.0106325695],
    [0.00000000054, 3.09595317364, 8186.2688450091],
    [0.00000000054, 0.0046117541, 21150.56954840009],
    [0.00000000054, 2.8785268556, 8226.8226538619],
    [0.00000000054, 1.09489146543, 18849.4713674577],
    [0.00000000068, 0.66923543045, 20213.4985608153],
    [0.00000000062, 1.20435016011, 9175.9982628317],
    [0.00000000068, 0.82610831691, 2391.6806352135],
    [0.00000000055, 4.11195400528, 23539.46356884929],
    [0.00000000072, 0.36267682866, 3342.34071689161],
    [0.00000000072, 2.61949743639, 3339.371771475],
    [0.00000000055, 2.02910200345, 6843.4476720483],
    [0.0000000006, 0.59388124144, 4885.72259219509],
    [0.00000000052, 0.7378393082, 7799.73682801889],
    [0.00000000063, 3.16724562752, 21265.7669440037],
    [0.00000000069, 5.26085614502, 24889.33097850809],
    [0.00000000051, 4.53705971735, 37895.6701078509],
    [0.00000000052, 3.81855873195, 45088.42593814109],
    [0.00000000051, 6.16736633171, 12410.9751180321],
    [0.00000000068, 4.79486677262, 1854.38848815109],
    [0.00000000054, 3.63347214209, 2736.0065034785],
    [0.00000000052, 0.45870559028, 16328.48044005229],
    [0.00000000051, 2.718963383, 16063.4086646685],
    [0.00000000061, 4.37753041368, 2655.74487965451],
    [0.00000000056, 6.12270264253, 8439.6341143329],
    [0.0000000005, 1.6663867573, 1727.90491115171],
    [0.00000000054, 4.41236851357, 5408.78764525591],
    [0.00000000059, 5.82807691891, 12516.6106895315],
    [0.00000000052, 2.44824121469, 4356.03162710049],
    [0.0000000005, 5.98909587083, 3116.5114484814],
    [0.0000000005, 3.27629040044, 3565.2010398852],
    [0.00000000049, 3.04482195507, 55516.6625273317],
    [0.0000000005, 3.76474251754, 3742.5283659405],
    [0.00000000048, 1.55364396872, 1882.83767561889],
    [0.00000000054, 1.33668194066, 20426.8149099055],
    [0.00000000048, 4.53136736783, 16865.28495214769],
    [0.00000000061, 3.9441700693, 19617.3201868063],
    [0.00000000048, 1.5236371173, 19190.7219959303],
    [0.00000000048, 4.57834518343, 24341.28449997309],
    [0.00000000056, 0.62265341478, 10787.3865270623],
    [0.00000000048, 1.47112939196, 44768.3432273621],
    [0.00000000047, 4.5210950554, 13517.55897844709],
    [0.00000000051, 4.70693407374, 5750.1055840313],
    [0.00000000053, 0.31337304133, 1971.70835637129],
    [0.00000000047, 0.76973666278, 11876.7134032175],
    [0.00000000047, 5.80540140583, 2257.59587624631],
    [0.00000000053, 0.80336106618, 20043.43074271529],
    [0.0000000005, 2.12975781859, 32765.00284213229],
    [0.00000000047, 0.13685654516, 39048.5663270907],
    [0.00000000048, 3.00714578495, 135.30889751891],
    [0.00000000064, 3.04700054519, 1329.75590774351],
    [0.00000000051, 5.44594778277, 2693.84541086851],
    [0.00000000055, 2.85027352182, 5834.8982011649],
    [0.00000000046, 0.27718268152, 1795.5022612045],
    [0.00000000055, 4.04664328548, 4403.76129272151],
    [0.00000000048, 0.33882252916, 14955.2895379155],
    [0.00000000059, 2.13527332496, 4290.0318531531],
    [0.00000000047, 1.62007289183, 35464.73766144989],
    [0.00000000047, 4.76166554542, 35465.2252964169],
    [0.00000000045, 0.23464093612, 5835.38583613191],
    [0.00000000052, 3.84343144307, 17660.05964657349],
    [0.00000000048, 0.9304663394, 1859.44687283811],
    [0.00000000056, 3.86355359519, 532.9702659601],
    [0.00000000052, 0.80583034945, 3718.2298520991],
    [0.00000000052, 2.1763439156, 2963.4826362675],
    [0.00000000045, 0.08670687387, 22487.12787535809],
    [0.00000000061, 4.60323457975, 7380.7398191107],
    [0.00000000045, 2.80587535059, 38252.2683202743],
    [0.00000000045, 3.33165976697, 8741.79888998789],
    [0.00000000054, 1.04355837542, 1056.1026293237],
    [0.00000000045, 2.35300742152, 5511.8804194745],
    [0.00000000045, 5.22801084585, 664.99986261351],
    [0.00000000045, 2.08641819226, 664.51222764649],
    [0.00000000045, 3.15300518185, 3973.6399834965],
    [0.00000000044, 3.22051341282, 5401.6740982551],
    [0.00000000054, 1.6560144475, 931.1192693683],
    [0.00000000046, 0.11012295064, 5881.6475457177],
    [0.0000000005, 2.52491431413, 1744.66980189871],
    [0.00000000044, 3.45607612983, 3244.8770169655],
    [0.00000000044, 5.8092834424, 3436.8354714011],
    [0.00000000045, 4.6699487066, 1265.81129610991],
    [0.00000000044, 6.06839188413, 17499.6039577989],
    [0.00000000043, 5.89648781204, 97670.14389541368],
    [0.00000000057, 4.80979061249, 46283.3605833327],
    [0.00000000044, 4.99066032403, 10191.17364574889],
    [0.00000000043, 2.87708345328, 33163.6394805075],
    [0.00000000047, 3.84961762116, 17256.8753538249],
    [0.00000000044, 6.17241939552, 2708.07250487011],
    [0.00000000059, 5.12086252013, 2524.20291796811],
    [0.00000000053, 0.5616635234, 8337.0289750813],
    [0.00000000053, 4.32226690599, 14054.8511255095],
    [0.00000000043, 5.31336835297, 12200.2188198749],
    [0.00000000046, 5.92396722498, 1648.69057468091],
    [0.00000000042, 2.74816043776, 845.8390172677],
    [0.00000000043, 4.63799596013, 41194.7317435659],
    [0.00000000047, 4.18521043124, 13531.78607244869],
    [0.00000000047, 1.11517601592, 15850.1095692305],
    [0.00000000042, 5.91221095313, 12729.9097849695],
    [0.00000000043, 3.52376715745, 15107.1195086979],
    [0.00000000043, 1.90839497963, 8123.7298796433],
    [0.00000000046, 1.9976600391, 2325.1932262991],
    [0.00000000043, 5.33982186623, 14469.34469500049],
    [0.00000000043, 2.75590007489, 2854.8841913937],
    [0.00000000043, 0.22627419016, 3826.82829697291],
    [0.00000000041, 4.48535365931, 42544.5991532247],
    [0.00000000042, 0.81046200996, 2652.2217613055],
    [0.00000000042, 4.75852639657, 38086.6307389955],
    [0.00000000045, 5.07021316431, 3361.1440047087],
    [0.00000000043, 5.68935522674, 28229.94340520789],
    [0.00000000048, 1.95422763977, 12825.8890121873],
    [0.00000000052, 5.96852999978, 6667.2415768815],
    [0.00000000041, 2.26231059465, 3296.20241094311],
    [0.00000000041, 0.7198636704, 3385.5100774235],
    [0.00000000043, 3.41833244496, 46681.5095867409],
    [0.0000000004, 4.95644488553, 6851.04885401611],
    [0.0000000004, 2.54157100544, 8983.0544867925],
    [0.00000000043, 5.68028575617, 20205.89737884749],
    [0.0000000004, 1.93822990752, 20728.9624319083],
    [0.00000000044, 0.93531414815, 29698.5313288193],
    [0.00000000041, 3.51275275749, 4670.36833444331],
    [0.00000000052, 4.40335159538, 3299.3054531985],
    [0.00000000052, 4.86200797685, 3382.4070351681],
    [0.00000000041, 1.79203239583, 48827.6750032161],
    [0.00000000046, 3.58085963587, 19247.6203708659],
    [0.00000000054, 2.95533474059, 3319.59321372389],
    [0.00000000039, 3.66982465499, 743.23387801611],
    [0.00000000039, 3.73873153389, 26357.43126715249],
    [0.00000000039, 0.5971388803, 26357.9189021195],
    [0.00000000049, 4.88931538366, 4025.9676087121],
    [0.00000000054, 2.40625176831, 574.5886158183],
    [0.00000000052, 2.35515997528, 1461.29786942991],
    [0.00000000041, 1.31959971528, 45487.0625765163],
    [0.00000000051, 5.06339472166, 102.84895673509],
    [0.00000000045, 1.82993488286, 2715.1860518709],
    [0.00000000045, 1.15223938219, 3966.52643649571],
];

const X2: &[Term] = &[
    [0.00068999338, 5.55726456394, 0.2438174835],
    [0.00082190105, 1.49108837587, 3340.8562441833],
    [0.00021826465, 3.36498183687, 6681.46867088311],
    [0.00006036287, 3.88765559226, 10022.0810975829],
    [0.00001291999, 3.87907870157, 3340.36860921629],
    [0.0000112517, 4.26813980903, 13362.6935242827],
    [0.00000182064, 4.62383908892, 16703.3059509825],
    [0.00000172815, 4.51953182882, 3337.33312583431],
    [0.00000164573, 4.61946633733, 3344.3793625323],
    [0.00000128077, 4.44271682598, 6680.98103591609],
    [0.00000093944, 0.94466158704, 3185.43584474911],
    [0.00000089463, 2.03179886201, 3496.2766436175],
    [0.00000040244, 5.00717764881, 6684.9917892321],
    [0.00000036661, 1.60353028933, 1059.6257476727],
    [0.0000002749, 4.97123271543, 20043.9183776823],
    [0.00000024847, 3.58016850622, 3149.4079780717],
    [0.00000023186, 5.57924030683, 3532.3045102949],
    [0.00000024495, 5.73028409392, 2544.5582373669],
    [0.00000020269, 3.44189573522, 4137.1542509997],
    [0.00000018207, 3.43690977415, 3098.1276402093],
    [0.00000017365, 4.15861973569, 2942.7072407751],
    [0.00000016922, 5.82133860801, 3583.5848481573],
    [0.00000016265, 1.04984131412, 5622.08674069391],
    [0.00000015988, 1.61453370816, 1194.6908277081],
    [0.00000015705, 4.76611870892, 3739.0052475915],
    [0.00000013211, 5.14469570759, 1990.9888345245],
    [0.00000016835, 2.34831657807, 2787.2868413409],
    [0.00000012623, 3.74877336094, 2389.1378379327],
    [0.00000013191, 4.82160322627, 10021.5934626159],
    [0.00000012309, 0.81667763054, 3339.8759231151],
    [0.00000015092, 0.24928051607, 1592.8398311163],
    [0.00000011292, 1.29869510013, 6526.04827144891],
    [0.00000012308, 2.12893393689, 3341.83656525151],
    [0.00000011493, 2.85941655933, 796.5418242999],
    [0.00000014005, 0.62664625135, 3894.4256470257],
    [0.00000010521, 2.12777102096, 4400.2381743725],
    [0.00000013157, 2.63040425407, 155.17658195069],
    [0.00000009155, 5.50505997499, 4292.5746504339],
    [0.00000008383, 4.10001775855, 4690.7236538421],
    [0.00000010715, 0.86217417712, 2146.4092339587],
    [0.00000008087, 5.34109961713, 10025.6042159319],
    [0.0000000807, 1.27034526598, 5487.0216606585],
    [0.00000008313, 1.22840731664, 2957.9597119601],
    [0.00000007119, 2.20406602795, 1589.3167127673],
    [0.00000007434, 1.73090220698, 3723.7527764065],
    [0.00000008463, 2.6921132565, 5088.8726572503],
    [0.00000008851, 2.06610908753, 4535.3032544079],
    [0.00000006118, 5.33366394762, 7079.61767429131],
    [0.00000005446, 6.0229880176, 5885.1706640667],
    [0.00000005632, 1.2308302527, 553.32558535889],
    [0.00000005307, 5.39355782839, 242.97242145751],
    [0.00000004779, 2.26833646163, 1748.2602305505],
    [0.00000005798, 4.8915656235, 7.3573644843],
    [0.00000005029, 2.19814519647, 2273.8731320263],
    [0.00000004779, 0.35723903723, 3333.7426971825],
    [0.00000004645, 6.11788961406, 951.4745887671],
    [0.00000005308, 4.04427431331, 6490.0204047715],
    [0.0000000568, 2.22833819331, 529.9347825781],
    [0.00000004316, 0.66431258202, 4933.4522578161],
    [0.00000004455, 4.63572690053, 2288.1002260279],
    [0.00000004106, 0.58655299185, 5092.3957755993],
    [0.00000004484, 3.97431621601, 3870.54720927791],
    [0.00000004129, 2.65817400046, 3347.96979118411],
    [0.00000003982, 5.31410167478, 23384.5308043821],
    [0.00000003668, 5.18866421914, 3340.83899053111],
    [0.00000003668, 0.93622666271, 3340.8734978355],
    [0.00000004603, 3.84811665743, 7477.7666776995],
    [0.00000003137, 3.80753274993, 6438.7400669091],
    [0.00000003223, 2.20207720882, 426.8420083595],
    [0.00000004083, 4.72879097145, 1349.62359217529],
    [0.00000003073, 3.35893621939, 1747.7725955835],
    [0.00000003724, 3.92616253855, 6151.7777057885],
    [0.0000000358, 0.29090747369, 2280.98667902709],
    [0.00000002506, 5.53763489777, 5331.6012612243],
    [0.00000002389, 2.03493789554, 6836.8890703173],
    [0.00000002777, 2.28004564558, 382.6527147397],
    [0.00000002243, 3.67333516968, 1350.1112271423],
    [0.00000002179, 2.71210505704, 6127.8992680407],
    [0.00000002794, 4.55180867021, 6677.9455525341],
    [0.00000002007, 2.53260318164, 6682.44899195131],
    [0.00000002204, 5.71912902267, 9492.3901324883],
    [0.00000001869, 2.42716744125, 4929.92913946711],
    [0.00000001955, 0.78128655783, 6681.45141723091],
    [0.00000002432, 0.97455241566, 640.1411037975],
    [0.00000001785, 4.64994614803, 3554.1553396213],
    [0.00000001956, 2.81122973926, 6681.4859245353],
    [0.00000002128, 2.52171277812, 7740.8506010723],
    [0.00000002132, 2.76821785309, 398.3928208917],
    [0.00000001915, 0.11819972923, 191.2044486281],
    [0.0000000162, 2.44109389132, 7875.91568110771],
    [0.0000000154, 4.39464833734, 3127.5571487453],
    [0.0000000196, 6.16925557034, 6924.1972748571],
    [0.00000001559, 0.77292154394, 2281.4743139941],
    [0.00000001569, 1.33136574759, 8969.8127143945],
    [0.00000001559, 5.1748562346, 8955.58562039291],
    [0.0000000139, 5.15686093227, 13362.2058893157],
    [0.00000001868, 4.12485939066, 5729.7502646325],
    [0.00000001714, 4.40106234765, 6674.3551238823],
    [0.00000001444, 2.78777227082, 2119.00767786191],
    [0.00000001461, 5.66929508293, 13366.21664263171],
    [0.00000001339, 2.11058695972, 2145.92159899169],
    [0.00000001222, 0.48334105773, 6254.8704800071],
    [0.00000001257, 3.98999018614, 641.12142486571],
    [0.00000001485, 1.64745398687, 9866.66069814871],
    [0.00000001566, 0.1823336539, 8962.6991673937],
    [0.0000000116, 1.59307514109, 6298.57213865991],
    [0.00000001124, 6.27801587166, 12833.00255918811],
    [0.00000001479, 5.74615387809, 10420.23010099111],
    [0.00000001201, 2.89742393965, 3767.4544350593],
    [0.00000001207, 3.26671107441, 3340.78893388051],
    [0.00000001207, 2.85824918128, 3340.9235544861],
    [0.00000001403, 3.27423655733, 6283.3196674749],
    [0.00000001082, 2.00077916742, 12303.3115940935],
    [0.00000001021, 0.11004697104, 4562.70481050471],
    [0.00000001086, 1.57123280785, 1751.2957139325],
    [0.00000001153, 4.95873813423, 7211.1596359777],
    [0.00000001277, 4.84268967955, 2699.9786368011],
    [0.0000000093, 6.1267827378, 2811.1652790887],
    [0.00000000918, 1.60703520232, 155.6642169177],
    [0.0000000089, 5.5607973242, 3343.8917275653],
    [0.00000000991, 4.45489640942, 9830.6328314713],
    [0.00000001152, 5.07946933275, 951.9622237341],
    [0.00000000877, 4.21408679267, 10818.3791043993],
    [0.00000001028, 4.41166071466, 3981.73385156551],
    [0.00000000724, 0.20350508903, 553.8132203259],
    [0.00000000813, 3.33403943461, 10022.0983512351],
    [0.00000000728, 6.18625603354, 853.4401992355],
    [0.00000000746, 5.16496010034, 9623.9320941747],
    [0.00000000684, 1.02857269442, 8274.0646845159],
    [0.00000000813, 1.30336771571, 10022.06384393071],
    [0.00000000641, 5.14516311024, 6681.40136058031],
    [0.00000000632, 0.7319037432, 10018.5579792339],
    [0.00000000616, 4.48165745116, 7235.0380737255],
    [0.00000000846, 3.03682654998, 6688.5822178839],
    [0.00000000857, 1.9292083754, 6041.5713845691],
    [0.00000000572, 4.49573046647, 529.44714761109],
    [0.00000000578, 5.24981714161, 6040.5910635009],
    [0.00000000568, 2.55555530886, 15643.9240207933],
    [0.0000000056, 2.22514515488, 397.9051859247],
    [0.00000000661, 5.25544946005, 6894.76776632111],
    [0.00000000538, 5.21568797326, 4690.23601887509],
    [0.00000000701, 3.64136458654, 3178.38960805111],
    [0.00000000689, 4.08112540175, 796.0541893329],
    [0.00000000688, 5.61433085796, 3503.3228803155],
    [0.00000000545, 4.98081015653, 2766.5114458485],
    [0.0000000055, 3.02101538887, 7633.1870771337],
    [0.0000000064, 4.7366498248, 6681.5359811859],
    [0.0000000051, 1.69224093861, 3893.93801205869],
    [0.00000000617, 2.56761131336, 3253.5480396435],
    [0.00000000596, 0.41459493687, 3428.16444872311],
    [0.00000000629, 0.07153257669, 6.86972951729],
    [0.00000000603, 0.30001085052, 4292.0870154669],
    [0.00000000548, 1.00098902826, 6680.4883498149],
    [0.00000000444, 4.27401799503, 3915.2010425181],
    [0.00000000411, 1.56657247102, 3980.7535304973],
    [0.0000000056, 5.65797499774, 26725.1432310819],
    [0.00000000399, 5.70475834066, 12964.5445208745],
    [0.00000000383, 5.96972895101, 2700.4713229023],
    [0.00000000409, 5.38057050876, 7064.3652031063],
    [0.00000000499, 6.03750484858, 2914.2580533073],
    [0.00000000408, 3.26187625259, 2648.6986429565],
    [0.00000000494, 2.58791492755, 1039.27042827391],
    [0.00000000367, 2.73062985578, 8270.5415661669],
    [0.00000000379, 2.88219149441, 11081.46302777211],
    [0.00000000354, 2.66145180389, 1194.2031927411],
    [0.00000000403, 1.70308177622, 8031.3360805419],
    [0.00000000449, 2.42384589322, 213.0552779545],
    [0.00000000397, 2.26969467217, 2544.07060239989],
    [0.00000000344, 5.97650048429, 4033.0138454101],
    [0.00000000314, 4.31468219581, 6872.91693699471],
    [0.0000000041, 5.85701038391, 8433.00820229911],
    [0.00000000297, 4.80643849748, 574.10098085129],
    [0.00000000326, 2.91113862688, 10023.06141865111],
    [0.00000000294, 2.83275017779, 5459.6201045617],
    [0.00000000278, 2.81997653776, 11216.5281078075],
    [0.00000000274, 5.82142747819, 10551.7720626775],
    [0.00000000355, 5.89906958059, 8672.21368792411],
    [0.00000000287, 3.03599407466, 3495.78900865049],
    [0.00000000282, 6.12544103738, 13760.8425276909],
    [0.00000000359, 4.43440472664, 3097.64000524229],
    [0.00000000266, 5.256773834, 10022.1484078857],
    [0.00000000284, 3.03494190652, 5828.2722891311],
    [0.00000000314, 0.37126567078, 16173.6149858879],
    [0.00000000263, 3.04592616684, 9468.51169474051],
    [0.00000000277, 2.72843223796, 3336.8454908673],
    [0.00000000251, 5.7926107652, 2942.21960580809],
    [0.00000000269, 0.77221793249, 2487.1722274643],
    [0.00000000256, 3.95807126956, 5088.3850222833],
    [0.00000000265, 5.66503537702, 10022.01378728011],
    [0.00000000241, 6.22048805, 2301.8296333929],
    [0.00000000232, 0.63600637107, 13359.1704059337],
    [0.00000000261, 1.96413122632, 1221.6047488379],
    [0.00000000225, 0.50307942308, 1751.7833488995],
    [0.00000000252, 4.68430989389, 1066.7392946735],
    [0.00000000246, 0.23565072433, 10264.80970155691],
    [0.00000000285, 1.72684624328, 12310.42514109431],
    [0.00000000243, 4.04327156952, 9779.3524936089],
    [0.0000000022, 0.63056559109, 8429.4850839501],
    [0.0000000028, 5.94773306444, 5091.90814063229],
    [0.00000000214, 5.86156666088, 2699.49100183409],
    [0.00000000234, 3.39608420004, 6468.1695754451],
    [0.00000000247, 2.62514291276, 213.5429129215],
    [0.00000000265, 2.9511521841, 18984.5364474931],
    [0.00000000206, 3.5327392964, 6836.40143535029],
    [0.00000000198, 3.71412641694, 13362.7107779349],
    [0.00000000199, 1.68344049522, 13362.6762706305],
    [0.00000000267, 1.77892178245, 5614.9731936931],
    [0.000000002, 0.77310064303, 7632.6994421667],
    [0.00000000238, 5.9988816376, 16706.8290693315],
    [0.00000000189, 2.6782648844, 3723.26514143949],
    [0.00000000187, 1.24354577352, 1592.3521961493],
    [0.00000000211, 3.39936925167, 7108.06686175911],
    [0.00000000244, 0.11291910384, 242.4847864905],
    [0.00000000193, 4.43444237494, 9070.3626913323],
    [0.00000000198, 5.26919917088, 191.6920835951],
    [0.00000000172, 4.83979658671, 13171.2452581711],
    [0.00000000196, 1.99723494678, 13207.27312484851],
    [0.00000000234, 2.13538732396, 7234.5504387585],
    [0.00000000177, 1.94425535548, 9639.18456535971],
    [0.00000000168, 1.75411639556, 1052.51220067191],
    [0.0000000017, 2.99535940889, 4379.8828549737],
    [0.00000000222, 0.39232779431, 5642.4420600927],
    [0.00000000157, 1.36555252862, 383.1403497067],
    [0.00000000155, 5.4801107314, 12296.1980470927],
    [0.00000000154, 4.61716677676, 10575.6505004253],
    [0.00000000155, 5.46273803177, 16702.81831601549],
    [0.00000000171, 1.78790613674, 3184.9482097821],
    [0.00000000148, 5.73788219136, 10235.3801930209],
    [0.0000000014, 4.92817953315, 6438.2524319421],
    [0.00000000141, 3.41744392254, 10029.1946445837],
    [0.00000000154, 5.87338987371, 2810.6776441217],
    [0.00000000137, 1.1938340413, 1437.41943168211],
    [0.00000000133, 0.19722245975, 8827.6340873583],
    [0.00000000131, 1.82245337339, 3030.01544531491],
    [0.00000000134, 0.93479121392, 2301.34199842589],
    [0.00000000128, 2.39973337332, 9382.18381126891],
    [0.00000000119, 5.77157495793, 5614.48555872609],
    [0.0000000012, 5.12604491583, 3320.0808486909],
    [0.00000000119, 1.00229912761, 3361.6316396757],
    [0.00000000116, 1.15960987836, 3651.6970430517],
    [0.00000000117, 5.85304070266, 6701.8239902819],
    [0.00000000146, 5.93167541862, 3738.51761262449],
    [0.00000000129, 3.89120051809, 6696.72114206811],
    [0.00000000118, 5.04634450495, 149.8070146181],
    [0.00000000107, 5.1204182656, 4407.3517213733],
    [0.00000000114, 4.75751094726, 7322.34627826531],
    [0.00000000105, 3.15741664634, 6666.2161996981],
    [0.00000000108, 2.60224731647, 10575.1628654583],
    [0.00000000115, 3.79062631878, 9168.88471583091],
    [0.0000000013, 3.18226883156, 10973.7995038335],
    [0.00000000101, 4.45451620205, 14158.9915310991],
    [0.00000000102, 1.14962329478, 4562.2171755377],
    [0.00000000099, 2.51353107397, 5621.5991057269],
    [0.00000000101, 5.32874387689, 9778.8648586419],
    [0.00000000115, 4.59270876787, 3148.9203431047],
    [0.00000000131, 1.18803355863, 6661.11335148431],
    [0.00000000134, 6.02271435541, 2913.7704183403],
    [0.00000000113, 3.71424984396, 6519.0020347509],
    [0.00000000096, 0.98095706382, 2700.9589578693],
    [0.00000000094, 0.24327692845, 6816.53375091851],
    [0.00000000097, 1.7862601316, 11371.9485072417],
    [0.00000000118, 4.70652198213, 10213.5293636945],
    [0.00000000088, 6.06276290521, 1835.56843509031],
    [0.00000000096, 2.19847165068, 15114.2330556987],
    [0.00000000119, 3.97087141578, 10177.01386205009],
    [0.00000000096, 5.83220204707, 6684.5041542651],
    [0.00000000117, 5.16366852876, 9225.7830907665],
    [0.00000000095, 4.29171920346, 5486.53402569149],
    [0.00000000088, 5.74190057756, 8030.8484455749],
    [0.00000000085, 0.27003870811, 6151.2900708215],
    [0.00000000089, 1.17370697759, 10177.5014970171],
    [0.00000000081, 1.80921862202, 5244.2930566845],
    [0.00000000081, 3.7917252962, 1505.04399160949],
    [0.00000000079, 5.56747633751, 10404.9776298061],
    [0.00000000095, 6.07783916606, 16305.1569475743],
    [0.0000000009, 4.6651717629, 10014.9675505821],
    [0.00000000098, 5.10446957982, 9808.78200214491],
    [0.00000000096, 2.86554772752, 1059.1381127057],
    [0.00000000073, 0.72497936154, 6660.6932753907],
    [0.00000000077, 4.35359928029, 4136.66661603269],
    [0.00000000071, 1.03916311153, 2274.3607669933],
    [0.00000000075, 5.63557700884, 7903.3172372045],
    [0.00000000098, 0.02076697156, 6040.10342853389],
    [0.00000000085, 0.4451008729, 4194.0526259353],
    [0.00000000073, 0.44168846203, 9380.71585523369],
    [0.00000000093, 6.09456085621, 1990.5011995575],
    [0.00000000086, 6.18283823038, 20752.4205449919],
    [0.00000000069, 1.38553111275, 1903.6806299847],
    [0.0000000007, 4.70293199621, 2388.6502029657],
    [0.00000000069, 2.17037139628, 8962.2115324267],
    [0.00000000066, 4.49413894792, 13517.62628874989],
    [0.00000000069, 6.00365908535, 30065.7556577817],
    [0.00000000079, 5.98866196477, 3337.26581553151],
    [0.00000000079, 0.13660951723, 3344.4466728351],
    [0.00000000064, 2.30763395826, 25287.47998191629],
    [0.00000000065, 3.24445550921, 2631.86644190671],
    [0.00000000065, 1.03862495257, 20199.3387771165],
    [0.00000000061, 5.30466523023, 4032.52621044309],
    [0.00000000062, 2.05245090503, 27035.49639498329],
    [0.00000000062, 1.42815172261, 5641.9544251257],
    [0.00000000063, 1.53293676835, 12936.0953334067],
    [0.00000000084, 2.38574993037, 1903.19299501769],
    [0.00000000071, 5.9537647297, 11770.0975106499],
    [0.00000000072, 5.64693968962, 13119.47728534169],
    [0.00000000063, 5.63682315335, 13362.7608345855],
    [0.00000000061, 5.64246036249, 17411.8081182921],
    [0.0000000006, 1.64524258736, 3205.7911641479],
    [0.00000000058, 1.51670643508, 7255.8134692179],
    [0.0000000008, 2.35306753256, 21795.4579090983],
    [0.00000000064, 0.76110443806, 6768.77687542291],
    [0.00000000063, 3.56114214131, 3340.38586286849],
    [0.00000000064, 5.16926753358, 3914.71340755109],
    [0.00000000056, 3.4708699951, 27434.1330333585],
    [0.00000000057, 0.87381633431, 12721.32828193349],
    [0.00000000058, 4.48269709673, 3475.92132421871],
    [0.00000000066, 5.64545659289, 14127.99895376209],
    [0.00000000055, 3.21479909652, 4846.1440532763],
    [0.00000000061, 3.21825869339, 5989.3110696563],
    [0.00000000056, 0.73623323904, 16699.7828326335],
    [0.00000000063, 1.53292797875, 3340.3513555641],
    [0.00000000054, 3.27785291788, 2786.7992063739],
    [0.00000000059, 3.22300251676, 7063.87756813929],
    [0.00000000052, 3.3634578249, 11128.73226830069],
    [0.00000000067, 4.65085357599, 2233.71743849851],
    [0.00000000051, 2.44574956886, 30376.10882168309],
    [0.0000000005, 4.18360328454, 17924.66688233689],
    [0.0000000005, 1.01622762006, 17925.1545173039],
    [0.00000000049, 3.23997362723, 14422.0754544719],
    [0.0000000005, 2.8802837297, 6594.1604663433],
    [0.00000000065, 5.34147580845, 6107.1238725483],
    [0.0000000005, 6.02043294912, 4049.8460464599],
    [0.00000000049, 1.41928479603, 14584.05445563709],
    [0.00000000056, 2.84568635986, 6702.2440663755],
    [0.00000000051, 4.61875474436, 8432.52056733209],
    [0.0000000006, 4.23711909745, 22743.6531969999],
    [0.0000000005, 1.38036390033, 426.3543733925],
    [0.00000000056, 5.63954798239, 9499.5036794891],
    [0.00000000048, 1.32224646794, 21265.7669440037],
    [0.00000000045, 5.8417095571, 13149.3944288447],
    [0.00000000055, 6.04214625243, 13362.62621397991],
    [0.00000000047, 2.92094264898, 9381.69617630189],
    [0.00000000051, 0.76284557905, 19514.2274125877],
    [0.00000000047, 2.03226039424, 7321.36595719711],
    [0.00000000048, 2.85045948416, 23141.8022004081],
    [0.00000000062, 5.07812840159, 6041.08374960209],
    [0.00000000056, 5.76598331597, 9595.4829067069],
    [0.00000000045, 5.50975189318, 17256.38771885789],
    [0.00000000043, 6.27646091354, 9485.2765854875],
    [0.00000000055, 1.28106527129, 16061.94070863329],
    [0.00000000042, 3.07366795744, 8800.2325312615],
    [0.00000000044, 5.5187562618, 17256.8753538249],
    [0.00000000055, 1.1518085855, 8425.8946552983],
    [0.00000000043, 2.56622033374, 6705.3471086309],
    [0.00000000042, 1.19860454413, 25287.9676168833],
    [0.0000000005, 2.38959203838, 11773.6206289989],
    [0.00000000046, 1.39809566223, 10973.3118688665],
    [0.00000000042, 2.01717790098, 6685.0590995349],
    [0.00000000043, 6.18001810512, 16460.08971204149],
    [0.00000000042, 4.51566406515, 6158.8912527893],
    [0.00000000043, 1.46895638191, 6709.91785835091],
    [0.0000000004, 3.81761467851, 6531.9054737485],
    [0.0000000005, 0.14621919981, 13892.3844893773],
    [0.00000000039, 2.35834767375, 691.9137837433],
    [0.00000000053, 6.10905519875, 3347.90248088131],
    [0.00000000041, 2.27487072554, 12323.17927852529],
    [0.0000000005, 2.32783343015, 18454.8454823985],
    [0.0000000004, 3.67259125733, 13554.1417903943],
    [0.00000000054, 6.27305419537, 3333.8100074853],
    [0.00000000049, 4.48594234475, 6657.59023313531],
    [0.00000000049, 3.05979125217, 11611.1539928667],
    [0.00000000039, 2.75953361592, 5243.80542171749],
    [0.00000000036, 1.795552239, 19801.1897737083],
    [0.00000000038, 0.48175253779, 8186.7564799761],
    [0.00000000045, 1.66666762132, 5628.7126527277],
    [0.00000000038, 1.09319366612, 11614.6771112157],
    [0.00000000042, 1.5832361891, 6677.8782422313],
    [0.00000000037, 0.09890574681, 8428.9974489831],
    [0.00000000036, 4.11399535323, 17655.0243572331],
    [0.00000000036, 4.93312159758, 19800.7021387413],
    [0.00000000038, 3.33015953455, 22325.1488741929],
    [0.00000000039, 0.38152703835, 3583.0972131903],
    [0.00000000044, 6.07368194572, 25686.1166202915],
    [0.00000000046, 4.61289468261, 4447.9950498681],
    [0.00000000047, 1.84502012984, 8982.5668518255],
    [0.00000000042, 2.98971092818, 6254.38284504009],
    [0.00000000035, 4.50369247266, 18606.25512851669],
    [0.00000000035, 1.76189804108, 5099.50932260011],
    [0.00000000034, 4.98411585506, 5827.78465416409],
    [0.00000000044, 5.32026095241, 7902.8296022375],
    [0.00000000034, 2.70658486935, 15663.79170522509],
    [0.00000000034, 3.0668239012, 28230.4310401749],
    [0.00000000042, 3.27968491376, 13363.67384535091],
    [0.00000000034, 5.24068810869, 3.2793008655],
    [0.00000000038, 5.33550411635, 6843.9353070153],
    [0.00000000033, 4.24587603414, 11243.44202893729],
    [0.00000000033, 1.58483385818, 4778.03185838191],
    [0.00000000035, 4.68394755805, 26084.2656236997],
    [0.00000000042, 3.47886429128, 31571.0434668747],
    [0.00000000034, 2.69688154052, 692.4014187103],
    [0.00000000034, 3.61044061282, 3347.4821562171],
    [0.00000000037, 3.0934511666, 3341.3489302845],
    [0.00000000037, 0.852611672, 3127.0695137783],
    [0.00000000036, 1.40223718038, 24606.3793707035],
    [0.00000000032, 3.21575612349, 8584.41784841729],
    [0.00000000039, 5.52528074071, 7255.3258342509],
    [0.00000000035, 4.88108821778, 3333.2550622155],
    [0.00000000031, 5.90785295838, 10595.9382609507],
    [0.0000000003, 0.37640913202, 20736.0759789091],
    [0.0000000003, 5.34266413467, 10713.75106384269],
    [0.00000000032, 3.96275214977, 1744.1821669317],
    [0.0000000003, 2.12718216703, 3.76693583251],
    [0.00000000036, 5.85230454873, 15113.74542073169],
    [0.0000000003, 0.02303147918, 1222.09238380491],
    [0.00000000031, 2.44338692629, 2575.0631797369],
    [0.00000000031, 0.53878733876, 4106.6493086297],
    [0.00000000029, 6.26168191376, 8827.14645239129],
    [0.0000000003, 4.97271935437, 640.6337898987],
    [0.00000000037, 1.22493098074, 14712.5609339415],
    [0.00000000028, 1.67581087356, 12509.4971425307],
    [0.0000000003, 2.88869644863, 6282.83203250789],
    [0.00000000029, 2.04175207609, 16276.7077601065],
    [0.00000000028, 0.37303060773, 8440.1217492999],
    [0.00000000032, 6.0617105522, 11769.6098756829],
    [0.0000000003, 0.66860843732, 24076.6884056089],
    [0.00000000028, 2.1670438228, 15651.03756779411],
    [0.00000000035, 3.10903764323, 19004.4041319249],
    [0.00000000035, 1.22211763949, 14712.07329897449],
    [0.00000000028, 5.99561319996, 3553.66770465429],
    [0.00000000027, 0.10827338046, 17101.4549543907],
    [0.00000000029, 5.93234517199, 27831.79440179969],
    [0.00000000029, 2.7907525184, 27832.2820367667],
    [0.00000000027, 4.82458640917, 31172.8944634665],
    [0.00000000027, 0.38322826891, 3312.4070567155],
    [0.00000000026, 5.35970768977, 7373.62627210991],
    [0.00000000033, 4.81267899723, 5629.2002876947],
    [0.00000000027, 5.74554498508, 3369.3054316511],
    [0.00000000027, 4.16679929541, 15265.64270181689],
    [0.00000000034, 1.66093650866, 28628.5800435831],
    [0.00000000027, 1.74573120715, 19402.55313533309],
    [0.00000000027, 0.24189728224, 29026.7290469913],
    [0.00000000026, 0.95064703918, 16065.82204399129],
    [0.00000000026, 0.0942600708, 21548.7185518083],
    [0.00000000028, 3.61885820364, 3531.81687532789],
    [0.00000000033, 0.50594568985, 3870.0595743109],
    [0.00000000025, 1.32229101061, 12722.7962379687],
    [0.00000000024, 5.04445688037, 22747.04689739089],
    [0.00000000025, 2.16587276266, 2957.4720769931],
    [0.00000000032, 0.05221443708, 12302.8239591265],
    [0.00000000023, 6.01606332444, 20597.4877805247],
    [0.00000000026, 0.77786131261, 3877.6607562787],
    [0.00000000025, 0.88197322398, 27433.64539839149],
    [0.00000000022, 2.17540514796, 17654.5367222661],
    [0.00000000021, 1.97613972525, 5085.2822285985],
    [0.00000000022, 4.45819756524, 13745.10242153889],
    [0.00000000023, 4.28492772247, 3325.6037729983],
    [0.00000000022, 2.4995334258, 10714.23869880971],
    [0.00000000023, 1.84356256708, 3356.10871536831],
    [0.00000000022, 4.79335421406, 13916.2629271251],
    [0.0000000002, 0.07454477807, 13518.1139237169],
    [0.0000000002, 0.616059439, 14054.36349054249],
    [0.0000000002, 0.616059439, 14054.8511255095],
    [0.0000000002, 5.18934224543, 14071.19569159229],
    [0.00000000021, 1.21172782919, 20354.27154158369],
    [0.00000000027, 1.65038286221, 23694.8839682835],
    [0.00000000027, 3.71231869252, 11925.03027511709],
    [0.00000000023, 3.11201039786, 1588.82907780029],
    [0.0000000002, 6.21683766974, 2817.7911911225],
    [0.0000000002, 3.92465652923, 29977.95981827489],
    [0.00000000019, 0.91394718054, 27035.9840299503],
    [0.0000000002, 5.18320463527, 9381.2034902007],
    [0.0000000002, 3.28496788336, 1063.14886602171],
    [0.0000000002, 3.64150715316, 36659.6723066415],
    [0.00000000021, 1.85047642439, 10596.4258959177],
    [0.00000000019, 5.49838475903, 3340.43591951909],
    [0.0000000002, 3.94260953954, 34911.6558935745],
    [0.00000000019, 1.47273454627, 23539.9512038163],
    [0.00000000019, 4.12041236337, 40000.2847333413],
    [0.0000000002, 0.43561923981, 2803.56409712089],
    [0.00000000024, 2.07709746581, 9225.29545579949],
    [0.00000000024, 1.38288674852, 30376.5964566501],
    [0.00000000022, 5.18167767699, 537.0483295789],
    [0.00000000019, 6.2245553125, 30774.7454600583],
    [0.00000000024, 4.96348676377, 21946.86755521649],
    [0.0000000002, 5.27217035189, 10787.3865270623],
    [0.00000000018, 2.5089052049, 23938.1002072245],
    [0.00000000018, 2.22783415294, 2487.6598624313],
    [0.00000000018, 1.88162325221, 24491.18197509989],
    [0.00000000021, 2.34416498409, 522.8212355773],
    [0.00000000023, 0.88923789924, 37455.9703134579],
    [0.00000000024, 5.88546419101, 3077.77232081051],
    [0.00000000018, 5.95267160454, 18208.1061251085],
    [0.00000000024, 5.81264582562, 4393.1246273717],
    [0.00000000022, 3.63700445171, 13915.77529215809],
    [0.0000000002, 5.90812888983, 3340.3012989135],
    [0.00000000017, 3.57017871636, 22345.0165586247],
    [0.00000000018, 3.83484681339, 3492.7535252685],
    [0.00000000018, 2.28892010525, 3188.95896309811],
    [0.00000000017, 0.73986431664, 17013.65911488389],
    [0.00000000017, 4.168572072, 28229.94340520789],
    [0.00000000017, 4.56595596791, 8186.2688450091],
    [0.00000000017, 2.84716533138, 5618.5636223449],
    [0.00000000016, 2.75060309814, 29978.4474532419],
    [0.00000000016, 3.77900213334, 10448.6792884589],
    [0.00000000022, 0.24435502443, 3603.9401675561],
    [0.00000000021, 3.48477603406, 26637.34739157509],
    [0.00000000015, 2.15480342032, 11371.4608722747],
    [0.00000000018, 2.23032843213, 18451.3223640495],
    [0.00000000015, 5.97010854409, 23546.9974405143],
    [0.0000000002, 3.1954846822, 33319.0598799417],
    [0.00000000015, 2.5702160884, 17277.6507493173],
    [0.0000000002, 5.73090127884, 20043.43074271529],
];

const X3: &[Term] = &[
    [0.00001905181, 0.55093544444, 0.2438174835],
    [0.00000638154, 1.43815993842, 6681.46867088311],
    [0.00000315844, 2.25892403607, 10022.0810975829],
    [0.00000167935, 2.76973197145, 3340.36860921629],
    [0.00000088045, 2.71691445968, 13362.6935242827],
    [0.00000034296, 1.41715335205, 3340.8562441833],
    [0.00000019004, 3.10474615459, 16703.3059509825],
    [0.00000017309, 3.53485555448, 3496.2766436175],
    [0.00000017052, 5.71088724992, 3185.43584474911],
    [0.00000012081, 2.98816202142, 6680.98103591609],
    [0.00000008036, 6.01800755163, 3337.33312583431],
    [0.00000008075, 2.89215175615, 3344.3793625323],
    [0.00000003586, 3.46976109002, 20043.9183776823],
    [0.00000003728, 4.30810867123, 3583.5848481573],
    [0.00000003708, 4.94088205435, 3098.1276402093],
    [0.00000002838, 3.43415575124, 6684.9917892321],
    [0.00000002391, 6.0723752744, 6526.04827144891],
    [0.00000002389, 2.12960839543, 3894.4256470257],
    [0.00000002358, 0.82395288049, 2787.2868413409],
    [0.00000002166, 4.15770883257, 155.17658195069],
    [0.00000001411, 3.32468261407, 10021.5934626159],
    [0.000000013, 0.7272428115, 4292.5746504339],
    [0.00000001268, 2.20906408368, 2389.1378379327],
    [0.00000001168, 1.89867328281, 3149.4079780717],
    [0.0000000117, 0.77806649581, 3532.3045102949],
    [0.00000001149, 1.8271205888, 4137.1542509997],
    [0.00000001, 2.3534770693, 3339.8759231151],
    [0.00000001053, 0.8685597461, 2544.5582373669],
    [0.00000000909, 5.60595748036, 4690.7236538421],
    [0.00000000997, 0.51493534476, 3341.83656525151],
    [0.00000000874, 3.57638185545, 1990.9888345245],
    [0.00000000773, 3.83045600398, 10025.6042159319],
    [0.000000008, 3.22880764813, 3723.7527764065],
    [0.00000000785, 5.96799151563, 2957.9597119601],
    [0.00000000624, 3.82443513781, 23384.5308043821],
    [0.00000000586, 5.53512020922, 1059.6257476727],
    [0.00000000721, 0.50440664244, 4535.3032544079],
    [0.00000000636, 4.17907998332, 5088.8726572503],
    [0.00000000615, 2.33680720167, 2146.4092339587],
    [0.00000000474, 5.37074646349, 2942.7072407751],
    [0.00000000604, 4.91081510372, 1592.8398311163],
    [0.0000000045, 1.89317206758, 3333.7426971825],
    [0.00000000486, 2.92245527853, 3739.0052475915],
    [0.00000000417, 1.04177275312, 3347.96979118411],
    [0.000000004, 0.4585334212, 4400.2381743725],
    [0.00000000374, 3.38310907177, 6836.8890703173],
    [0.00000000488, 4.6649247494, 6924.1972748571],
    [0.00000000399, 2.43777775214, 6490.0204047715],
    [0.00000000356, 1.1895017745, 6127.8992680407],
    [0.00000000362, 2.14655068421, 5622.08674069391],
    [0.00000000295, 3.68111290408, 7079.61767429131],
    [0.00000000356, 0.14502929692, 9866.66069814871],
    [0.0000000034, 2.28749442266, 7477.7666776995],
    [0.00000000239, 5.17898361533, 6438.7400669091],
    [0.00000000214, 0.95650348151, 6682.44899195131],
    [0.00000000184, 3.67133608119, 13362.2058893157],
    [0.00000000176, 3.96314611309, 5331.6012612243],
    [0.00000000215, 2.58410594073, 5729.7502646325],
    [0.00000000159, 5.31902457668, 4933.4522578161],
    [0.00000000148, 0.07133203651, 6298.57213865991],
    [0.00000000154, 5.64200281325, 6677.9455525341],
    [0.00000000153, 0.89551511976, 7875.91568110771],
    [0.00000000157, 6.03012929865, 796.5418242999],
    [0.00000000172, 4.1889922875, 13366.21664263171],
    [0.00000000143, 2.395782474, 7235.0380737255],
    [0.00000000155, 0.96938893909, 7740.8506010723],
    [0.00000000116, 4.64918761388, 1194.6908277081],
    [0.00000000106, 3.00887462201, 155.6642169177],
    [0.00000000089, 4.02630363689, 3343.8917275653],
    [0.000000001, 2.87689937674, 9830.6328314713],
    [0.00000000108, 4.17718423869, 10420.23010099111],
    [0.00000000084, 2.68446580877, 10818.3791043993],
    [0.00000000098, 4.17525996193, 26725.1432310819],
    [0.00000000076, 0.87920756584, 4929.92913946711],
    [0.00000000074, 1.00299622836, 7633.1870771337],
    [0.00000000086, 5.15622842132, 1589.3167127673],
    [0.00000000072, 6.20405951094, 5885.1706640667],
    [0.00000000062, 1.68960801507, 5487.0216606585],
    [0.00000000065, 5.02060335506, 10264.80970155691],
    [0.00000000062, 3.09389208181, 7211.1596359777],
    [0.00000000082, 1.44324153466, 6688.5822178839],
    [0.00000000057, 4.66555911574, 12833.00255918811],
    [0.00000000057, 1.54372665386, 9468.51169474051],
    [0.00000000056, 5.13139205932, 6681.45141723091],
    [0.00000000056, 0.87897817015, 6681.4859245353],
    [0.00000000069, 2.58172462044, 796.0541893329],
    [0.00000000065, 1.91690600798, 3870.54720927791],
    [0.00000000067, 3.74829679592, 9492.3901324883],
    [0.00000000051, 5.79032862137, 8274.0646845159],
    [0.00000000048, 3.88765170229, 397.9051859247],
    [0.0000000005, 0.50123821286, 13207.27312484851],
    [0.00000000043, 5.49155036342, 426.8420083595],
    [0.00000000044, 5.87908345436, 8031.3360805419],
    [0.00000000039, 1.20945071946, 1194.2031927411],
    [0.00000000043, 1.35709156628, 10023.06141865111],
    [0.00000000044, 0.94709794694, 5092.3957755993],
    [0.00000000037, 0.18533157058, 8827.6340873583],
    [0.00000000042, 1.70772874502, 10022.0983512351],
    [0.00000000043, 0.30947981672, 3184.9482097821],
    [0.00000000033, 2.40776286352, 1349.62359217529],
    [0.00000000035, 2.95444208499, 9070.3626913323],
    [0.00000000036, 1.36035547703, 11081.46302777211],
    [0.00000000044, 0.12174745615, 12303.3115940935],
    [0.00000000033, 0.88839870426, 15643.9240207933],
    [0.00000000042, 5.96028045375, 10022.06384393071],
    [0.00000000032, 5.66439939781, 10018.5579792339],
    [0.00000000029, 1.54951760073, 3495.78900865049],
    [0.00000000032, 2.40303298785, 6680.4883498149],
    [0.00000000031, 1.90739176085, 7.3573644843],
    [0.00000000036, 3.46372584197, 7064.3652031063],
    [0.00000000026, 1.27046456409, 11216.5281078075],
    [0.00000000035, 4.70034992379, 3336.8454908673],
    [0.00000000025, 3.03604811102, 10575.6505004253],
    [0.00000000033, 4.36445511764, 8672.21368792411],
    [0.00000000026, 5.99843166178, 1592.3521961493],
    [0.00000000027, 3.98200757587, 16702.81831601549],
    [0.00000000025, 4.57948088729, 13760.8425276909],
    [0.00000000027, 3.09776670837, 191.2044486281],
    [0.00000000026, 3.54518463791, 6894.76776632111],
    [0.00000000023, 5.85147228213, 2281.4743139941],
    [0.00000000027, 4.51774923051, 16706.8290693315],
    [0.00000000026, 5.53508596353, 8433.00820229911],
    [0.00000000028, 3.3627308039, 9623.9320941747],
    [0.00000000027, 5.85014917702, 2145.92159899169],
    [0.00000000024, 1.25782822684, 8270.5415661669],
    [0.00000000026, 1.08150011094, 1747.7725955835],
    [0.00000000022, 0.90453576854, 3767.4544350593],
    [0.00000000025, 3.82100205156, 2811.1652790887],
    [0.0000000002, 1.64178140869, 3554.1553396213],
    [0.00000000019, 4.46076005938, 3127.5571487453],
    [0.00000000022, 5.17308651919, 553.32558535889],
    [0.00000000023, 3.76515587292, 951.4745887671],
    [0.00000000019, 1.67275856465, 553.8132203259],
    [0.00000000026, 0.16277946818, 8962.6991673937],
    [0.0000000002, 0.4301144808, 9639.18456535971],
    [0.00000000019, 4.43079189104, 2810.6776441217],
    [0.00000000021, 0.21950833051, 951.9622237341],
    [0.00000000017, 3.25327411593, 13171.2452581711],
    [0.00000000022, 4.3849274821, 3738.51761262449],
    [0.00000000019, 3.21726717973, 6681.40136058031],
    [0.00000000022, 1.65280044894, 10973.7995038335],
    [0.00000000016, 2.94665873224, 4136.66661603269],
    [0.00000000019, 2.80877068966, 6681.5359811859],
    [0.00000000021, 2.92855757827, 1748.2602305505],
    [0.00000000017, 5.71391599259, 382.6527147397],
    [0.0000000002, 0.18316423734, 2280.98667902709],
    [0.00000000022, 4.74779376737, 1350.1112271423],
    [0.00000000016, 0.63462673047, 6254.8704800071],
    [0.00000000016, 3.93662181429, 10551.7720626775],
    [0.00000000015, 3.10357108475, 10177.5014970171],
    [0.00000000014, 5.09381800673, 2914.2580533073],
    [0.00000000014, 1.36653791314, 5459.6201045617],
    [0.00000000019, 4.60528090517, 1990.5011995575],
    [0.00000000014, 1.82944391532, 10029.1946445837],
    [0.00000000013, 4.04119501897, 5614.9731936931],
    [0.00000000015, 2.66542384043, 6674.3551238823],
    [0.00000000013, 1.51732945573, 1066.7392946735],
    [0.00000000016, 4.23161759812, 640.1411037975],
    [0.00000000013, 3.65983424195, 5621.5991057269],
    [0.00000000013, 1.47843905604, 242.97242145751],
    [0.00000000014, 0.24731425362, 12310.42514109431],
    [0.00000000013, 0.42091404951, 191.6920835951],
    [0.00000000011, 3.19331361004, 2388.6502029657],
    [0.00000000012, 3.12268751453, 3148.9203431047],
    [0.00000000013, 5.43821523436, 2119.00767786191],
    [0.00000000011, 5.1973636254, 3583.0972131903],
    [0.00000000011, 1.9983269447, 3340.38586286849],
    [0.0000000001, 1.49714805225, 4534.81561944089],
    [0.00000000011, 6.2512948129, 3340.3513555641],
    [0.0000000001, 4.88853298993, 8429.4850839501],
    [0.0000000001, 3.31545628452, 10014.9675505821],
    [0.00000000009, 3.88123559083, 3320.50092478451],
    [0.00000000011, 4.66037741803, 8962.2115324267],
    [0.00000000009, 2.24701790497, 3361.2115635821],
    [0.00000000009, 4.1053736993, 12296.1980470927],
    [0.0000000001, 5.06205358587, 16173.6149858879],
    [0.00000000009, 2.02386810043, 1052.51220067191],
    [0.00000000009, 3.68063634198, 5614.48555872609],
    [0.0000000001, 1.99400297925, 529.9347825781],
    [0.00000000008, 6.05827415687, 3893.93801205869],
    [0.00000000009, 5.82204012446, 3325.6037729983],
    [0.00000000008, 1.82638763774, 2786.7992063739],
    [0.00000000009, 0.30647315712, 3356.10871536831],
    [0.00000000011, 4.85651046171, 242.4847864905],
    [0.00000000009, 1.42556082626, 1751.7833488995],
    [0.00000000007, 0.31910199684, 2957.4720769931],
    [0.00000000008, 4.58643573119, 4292.0870154669],
    [0.00000000007, 3.02875762795, 14158.9915310991],
    [0.0000000001, 3.75880088864, 529.44714761109],
    [0.0000000001, 4.75162534448, 12302.8239591265],
    [0.00000000009, 4.40822524545, 6684.5041542651],
    [0.00000000008, 5.21609653228, 2273.8731320263],
];

const X4: &[Term] = &[
    [0.00000174339, 4.50461485471, 3340.8562441833],
    [0.00000065332, 1.45277537677, 0.2438174835],
    [0.00000021612, 5.4757741621, 6681.46867088311],
    [0.00000012491, 0.51687441739, 10022.0810975829],
    [0.00000005152, 1.11384612445, 13362.6935242827],
    [0.00000002432, 5.03376242803, 3496.2766436175],
    [0.00000002407, 4.19068604389, 3185.43584474911],
    [0.00000001485, 1.55324524407, 16703.3059509825],
    [0.00000001453, 1.17593053226, 3340.36860921629],
    [0.00000000592, 2.79217502706, 3583.5848481573],
    [0.00000000596, 0.15627931299, 3098.1276402093],
    [0.00000000649, 1.53914017168, 6680.98103591609],
    [0.0000000038, 4.55600229997, 6526.04827144891],
    [0.00000000351, 1.94518064214, 20043.9183776823],
    [0.00000000281, 1.02784973125, 3344.3793625323],
    [0.00000000275, 1.11119927155, 3337.33312583431],
    [0.00000000287, 3.61921656726, 3894.4256470257],
    [0.00000000285, 5.58839678189, 2787.2868413409],
    [0.00000000151, 1.78910865682, 6684.9917892321],
    [0.00000000128, 5.24790443912, 6836.8890703173],
    [0.00000000111, 1.85011350887, 10021.5934626159],
    [0.00000000088, 3.15545951202, 6924.1972748571],
    [0.00000000071, 2.31380588062, 23384.5308043821],
    [0.00000000055, 2.26852590135, 10025.6042159319],
    [0.00000000048, 5.95592456117, 6127.8992680407],
    [0.00000000063, 4.9176792446, 9866.66069814871],
    [0.00000000034, 0.35023274977, 6438.7400669091],
    [0.00000000033, 3.27139275821, 1059.6257476727],
    [0.00000000019, 2.14803379863, 13362.2058893157],
    [0.00000000018, 0.78782665763, 6490.0204047715],
    [0.00000000016, 5.2127846829, 3149.4079780717],
    [0.00000000016, 5.8148929291, 2942.7072407751],
    [0.00000000015, 0.86980577909, 3532.3045102949],
    [0.00000000015, 1.05784197172, 2544.5582373669],
    [0.00000000014, 2.75650621307, 5622.08674069391],
    [0.00000000014, 0.20093505699, 3739.0052475915],
    [0.00000000013, 4.83578063472, 4400.2381743725],
    [0.00000000013, 5.02472221311, 4137.1542509997],
    [0.00000000012, 3.15784569291, 1194.6908277081],
    [0.00000000012, 5.66215318851, 6682.44899195131],
    [0.00000000015, 0.65316905429, 7477.7666776995],
    [0.00000000011, 1.92062639148, 7079.61767429131],
    [0.00000000015, 5.270331101, 529.9347825781],
    [0.00000000013, 5.72126392176, 10177.5014970171],
    [0.00000000014, 3.84659935898, 7235.0380737255],
    [0.00000000011, 3.51933198406, 10264.80970155691],
    [0.00000000013, 2.66285978116, 13366.21664263171],
    [0.0000000001, 4.52594962497, 796.5418242999],
    [0.0000000001, 2.37075551462, 5331.6012612243],
    [0.00000000012, 1.03827349416, 5729.7502646325],
    [0.00000000011, 2.64809487107, 26725.1432310819],
    [0.00000000008, 4.81245299131, 6298.57213865991],
    [0.00000000008, 3.95118300322, 3340.8734978355],
    [0.00000000008, 1.92041137172, 3340.83899053111],
    [0.00000000007, 0.43533123258, 1990.9888345245],
    [0.00000000009, 3.5091551444, 2280.98667902709],
    [0.00000000007, 5.60821148288, 7875.91568110771],
    [0.00000000008, 3.59280368451, 4933.4522578161],
    [0.00000000007, 5.32208951844, 2389.1378379327],
    [0.00000000009, 1.82497486389, 1592.8398311163],
    [0.00000000007, 2.39846706486, 3339.8759231151],
    [0.00000000007, 3.71269284859, 3341.83656525151],
    [0.00000000007, 2.58444553246, 3343.8917275653],
    [0.00000000006, 0.55736215127, 6151.7777057885],
    [0.00000000007, 5.10772331644, 3184.9482097821],
    [0.00000000007, 1.05272897981, 155.17658195069],
    [0.00000000006, 3.65850030907, 1589.3167127673],
    [0.00000000005, 2.88251144144, 5487.0216606585],
    [0.00000000005, 1.46784159994, 5885.1706640667],
    [0.00000000005, 0.80161683332, 4292.5746504339],
    [0.00000000006, 2.45234336003, 2146.4092339587],
    [0.00000000005, 5.68329332382, 4690.7236538421],
    [0.00000000005, 2.80269016526, 2957.9597119601],
    [0.00000000004, 5.28325791601, 13207.27312484851],
    [0.00000000005, 3.64094054061, 4535.3032544079],
    [0.00000000004, 3.3147227807, 3723.7527764065],
    [0.00000000005, 4.28302336857, 5088.8726572503],
    [0.00000000004, 0.05439896723, 9468.51169474051],
    [0.00000000004, 5.79414027536, 398.3928208917],
    [0.00000000003, 6.01492767118, 3870.54720927791],
    [0.00000000003, 5.81270604686, 7633.1870771337],
];

const X5: &[Term] = &[
    [0.00000002822, 2.53736821761, 0.2438174835],
    [0.0000000131, 4.6245743029, 3340.8562441833],
    [0.00000000954, 3.55909372543, 6681.46867088311],
    [0.00000000429, 4.88697356497, 10022.0810975829],
    [0.00000000275, 0.24510755091, 3496.2766436175],
    [0.00000000272, 2.6643749818, 3185.43584474911],
    [0.00000000241, 5.7307047313, 13362.6935242827],
    [0.00000000262, 6.24547382421, 3340.36860921629],
    [0.00000000092, 6.24977577619, 16703.3059509825],
    [0.00000000076, 1.27309430645, 3583.5848481573],
    [0.00000000077, 1.65718815142, 3098.1276402093],
    [0.00000000049, 3.03838424904, 6526.04827144891],
    [0.00000000032, 0.1187554071, 6680.98103591609],
    [0.00000000026, 0.39487275836, 20043.9183776823],
    [0.00000000027, 5.12576113855, 3894.4256470257],
    [0.00000000026, 4.04351110154, 2787.2868413409],
    [0.00000000013, 0.43187059389, 6836.8890703173],
    [0.00000000013, 1.64004823919, 6924.1972748571],
    [0.00000000006, 0.36382978226, 10021.5934626159],
    [0.00000000007, 1.40323245136, 3337.33312583431],
    [0.00000000007, 4.61746707728, 3344.3793625323],
    [0.00000000005, 4.43055095713, 6127.8992680407],
    [0.00000000007, 3.39474539876, 9866.66069814871],
    [0.00000000006, 0.04415481578, 6684.9917892321],
    [0.00000000005, 0.78203649698, 23384.5308043821],
    [0.00000000004, 1.85425114024, 6438.7400669091],
];

const Y0: &[Term] = &[
    [1.51664432758, 4.63267999004, 3340.8562441833],
    [0.2133734347, 1.15310710021, 0.2438174835],
    [0.07067734657, 4.97080577669, 6681.46867088311],
    [0.00494034875, 5.30892921206, 10022.0810975829],
    [0.00135189385, 2.16683537182, 3340.36860921629],
    [0.0004092783, 5.64705236353, 13362.6935242827],
    [0.00021051988, 0.23298189024, 3337.33312583431],
    [0.0002102727, 5.89078683719, 3344.3793625323],
    [0.00011370204, 3.26158494021, 1059.6257476727],
    [0.00013426076, 5.34254489555, 529.9347825781],
    [0.00006769403, 2.04649779939, 3340.83899053111],
    [0.00006769355, 4.07726943088, 3340.8734978355],
    [0.00008285925, 3.43188641054, 2280.98667902709],
    [0.0000543391, 5.83045260147, 2942.7072407751],
    [0.0000481333, 0.27943415467, 3739.0052475915],
    [0.00004893493, 2.85680765111, 5622.08674069391],
    [0.00005269759, 0.75939928833, 6151.7777057885],
    [0.00003774767, 2.39590149517, 6680.98103591609],
    [0.00003623045, 4.53783234193, 796.5418242999],
    [0.00003725058, 5.98517547467, 16703.3059509825],
    [0.00003767289, 5.934437423, 398.3928208917],
    [0.00002396177, 5.34735734199, 3149.4079780717],
    [0.00002262756, 0.77787856455, 3532.3045102949],
    [0.00001976674, 0.56979018369, 6677.9455525341],
    [0.00002227632, 0.12453915456, 3340.78893388051],
    [0.00002227573, 5.9992280749, 3340.9235544861],
    [0.00001950645, 1.1572948452, 2544.5582373669],
    [0.00002179897, 0.12455085977, 6283.3196674749],
    [0.00001684046, 1.57848903772, 5885.1706640667],
    [0.00002237564, 3.25024245156, 8962.6991673937],
    [0.00001629438, 4.95303923805, 4137.1542509997],
    [0.00001957286, 6.23124655952, 6684.9917892321],
    [0.00001382161, 3.74262124968, 1751.2957139325],
    [0.00001364523, 5.17298469073, 2811.1652790887],
    [0.00001285835, 3.13464527657, 1194.6908277081],
    [0.00001468951, 0.30602473382, 3870.54720927791],
    [0.0000157221, 3.2770489921, 1589.3167127673],
    [0.00000955879, 3.79979264711, 426.8420083595],
    [0.00000819304, 3.5879548946, 4400.2381743725],
    [0.00000714429, 4.49383093867, 191.2044486281],
    [0.00000719663, 1.08407118449, 9492.3901324883],
    [0.0000064326, 2.98709791321, 5487.0216606585],
    [0.00000795172, 2.82580884918, 5092.3957755993],
    [0.00000630906, 2.38462144554, 6681.45141723091],
    [0.00000630906, 4.41539307703, 6681.4859245353],
    [0.00000782173, 2.73881042817, 5091.90814063229],
    [0.00000703756, 5.67896443651, 213.5429129215],
    [0.00000581847, 2.38152204086, 3185.43584474911],
    [0.00000553454, 3.74330200173, 3496.2766436175],
    [0.0000066346, 5.31434426935, 2544.07060239989],
    [0.00000491963, 0.60494800834, 7079.61767429131],
    [0.00000426327, 0.43687696114, 2145.92159899169],
    [0.0000053391, 1.72930733886, 1592.8398311163],
    [0.00000386953, 3.5025801807, 8433.00820229911],
    [0.00000417478, 2.3934604951, 3339.8759231151],
    [0.00000417367, 3.73029667099, 3341.83656525151],
    [0.00000359961, 0.04010115133, 20043.9183776823],
    [0.00000352641, 2.31813890735, 6254.8704800071],
    [0.00000351819, 3.59912427222, 12303.3115940935],
    [0.0000032132, 0.37355501133, 3554.1553396213],
    [0.00000377309, 2.56396696963, 2146.4092339587],
    [0.00000307274, 5.65660829568, 3127.5571487453],
    [0.00000284287, 0.46340069524, 7.3573644843],
    [0.00000259684, 0.32305651983, 1990.9888345245],
    [0.00000246886, 1.84243729588, 1747.7725955835],
    [0.00000313688, 3.53520341472, 4535.3032544079],
    [0.00000271483, 0.37698651521, 6468.1695754451],
    [0.00000298122, 4.39537363917, 5088.8726572503],
    [0.00000223194, 1.98204681533, 3320.0808486909],
    [0.00000221461, 4.14148614982, 3361.6316396757],
    [0.00000233899, 0.46609609268, 9623.9320941747],
    [0.00000207617, 0.4626627956, 6681.40136058031],
    [0.00000205148, 0.28695974581, 10025.6042159319],
    [0.00000207784, 0.90748162445, 10018.5579792339],
    [0.00000193198, 3.36114050168, 2119.00767786191],
    [0.0000021863, 5.68765119081, 6490.0204047715],
    [0.0000024799, 2.88872133203, 2913.7704183403],
    [0.00000207617, 0.05416640875, 6681.5359811859],
    [0.00000178587, 4.11200624291, 1221.6047488379],
    [0.000001784, 2.59904254913, 10021.5934626159],
    [0.00000164293, 5.80289640537, 4690.7236538421],
    [0.00000157091, 5.19939410162, 2389.1378379327],
    [0.00000151308, 3.00360651428, 4562.2171755377],
    [0.00000177027, 2.69928080706, 2957.9597119601],
    [0.00000147685, 0.90426952883, 7211.1596359777],
    [0.00000164646, 5.28805943773, 7477.7666776995],
    [0.00000153884, 2.87447082637, 640.1411037975],
    [0.00000157989, 3.42539314748, 3723.7527764065],
    [0.00000146757, 2.84466358271, 3337.26581553151],
    [0.00000166434, 1.59845879272, 10213.5293636945],
    [0.00000146132, 3.27579621025, 3344.4466728351],
    [0.00000118082, 2.72149356676, 4562.70481050471],
    [0.0000011977, 3.08805027302, 11773.6206289989],
    [0.00000113695, 0.92730568398, 4292.5746504339],
    [0.00000143954, 3.79112207293, 2787.2868413409],
    [0.00000113828, 1.92140197091, 3333.7426971825],
    [0.00000112131, 4.7844331722, 3205.7911641479],
    [0.00000144684, 3.24900405626, 1349.62359217529],
    [0.00000118108, 3.61481367969, 4929.92913946711],
    [0.0000010669, 1.3386995385, 3475.92132421871],
    [0.00000120237, 1.83849834021, 9225.7830907665],
    [0.00000119599, 2.33508766672, 3894.4256470257],
    [0.0000010491, 0.80738994994, 382.6527147397],
    [0.0000009592, 4.24460901134, 3347.96979118411],
    [0.00000093778, 3.97176912203, 1748.2602305505],
    [0.00000088754, 1.41602519781, 12833.00255918811],
    [0.00000112794, 1.18558937662, 155.17658195069],
    [0.00000091596, 4.6553365215, 951.4745887671],
    [0.00000086667, 5.15042860741, 3098.1276402093],
    [0.000001185, 2.09460100184, 7902.8296022375],
    [0.00000089906, 3.86574614268, 2942.21960580809],
    [0.00000085205, 2.64363572803, 2281.4743139941],
    [0.0000011366, 0.87318331181, 5486.53402569149],
    [0.0000008064, 0.9711827379, 3583.5848481573],
    [0.00000085344, 2.11418392564, 4933.4522578161],
    [0.00000084447, 5.69213107859, 6674.3551238823],
    [0.00000079513, 2.2803603119, 5088.3850222833],
    [0.00000101901, 2.19454495695, 529.44714761109],
    [0.00000073054, 3.46030032788, 1052.51220067191],
    [0.00000073997, 4.31891480859, 3767.4544350593],
    [0.00000070372, 6.06190685925, 553.32558535889],
    [0.00000091916, 2.68950348204, 9595.4829067069],
    [0.00000073607, 3.91508991039, 7740.8506010723],
    [0.00000066068, 0.0327278203, 1066.7392946735],
    [0.00000081219, 5.5749732553, 2810.6776441217],
    [0.0000006643, 3.8719549892, 2700.4713229023],
    [0.00000054145, 2.72166186985, 6526.04827144891],
    [0.00000059768, 3.24283548288, 6041.5713845691],
    [0.00000066173, 4.75351556577, 10022.0983512351],
    [0.00000049883, 3.52241504779, 3312.4070567155],
    [0.00000049178, 2.60154680851, 3369.3054316511],
    [0.00000048202, 0.32517036897, 397.9051859247],
    [0.0000004731, 3.94287633641, 15643.9240207933],
    [0.00000048401, 5.71493252665, 3.76693583251],
    [0.00000066173, 2.72274393427, 10022.06384393071],
    [0.00000043167, 3.68410600012, 4690.23601887509],
    [0.00000052329, 3.78533146894, 7903.3172372045],
    [0.00000043258, 0.37554748132, 149.8070146181],
    [0.00000053318, 0.93774568542, 10420.23010099111],
    [0.00000038925, 4.06852349635, 6682.44899195131],
    [0.00000043058, 1.14093100948, 3325.6037729983],
    [0.00000042835, 4.98274982261, 3356.10871536831],
    [0.00000049042, 0.37958979733, 2273.8731320263],
    [0.00000045897, 3.30255905408, 2288.1002260279],
    [0.00000036267, 0.37823003866, 23384.5308043821],
    [0.00000050027, 0.20993213048, 5621.5991057269],
    [0.00000041152, 2.03769608425, 537.0483295789],
    [0.00000038722, 5.48335922125, 522.8212355773],
    [0.00000044751, 2.74146086011, 3077.77232081051],
    [0.00000031695, 2.65244951875, 5629.2002876947],
    [0.00000031478, 0.69290700501, 5331.6012612243],
    [0.00000033349, 0.55070002892, 242.97242145751],
    [0.0000003613, 0.70369333471, 9808.78200214491],
    [0.0000003166, 3.54279700539, 2648.6986429565],
    [0.00000039058, 2.73256710316, 6680.4883498149],
    [0.00000032374, 3.86940131593, 7875.91568110771],
    [0.00000038493, 0.77970755386, 6894.76776632111],
    [0.00000040044, 3.38354028832, 3603.9401675561],
    [0.00000027893, 2.32668323191, 7373.13863714289],
    [0.00000027665, 0.80854741955, 12964.5445208745],
    [0.00000027878, 5.37977989507, 1350.1112271423],
    [0.00000028322, 4.11041470939, 8030.8484455749],
    [0.00000028486, 6.08536458002, 5614.9731936931],
    [0.00000029761, 3.84843907128, 3178.38960805111],
    [0.00000035657, 2.70492671014, 8428.9974489831],
    [0.00000028159, 2.26219738844, 3503.3228803155],
    [0.00000027295, 1.14579185082, 213.0552779545],
    [0.00000024083, 2.53502654613, 4033.0138454101],
    [0.00000023726, 2.22123833128, 3320.50092478451],
    [0.00000023543, 3.90125907437, 3361.2115635821],
    [0.00000024407, 0.0492077313, 76.50988875911],
    [0.0000002236, 3.29082907917, 15114.2330556987],
    [0.00000022681, 0.62465627638, 13366.21664263171],
    [0.00000030767, 3.54413358961, 102.84895673509],
    [0.00000023116, 2.67363493175, 1692.40948698591],
    [0.00000024795, 4.51530523814, 691.9137837433],
    [0.00000021819, 0.39147454554, 10022.1484078857],
    [0.0000002142, 2.33354950951, 6660.6932753907],
    [0.00000020686, 2.52092831971, 1582.2031657665],
    [0.00000025165, 5.06243453868, 3335.3333198759],
    [0.00000021819, 0.79997093238, 10022.01378728011],
    [0.0000002511, 1.05972287332, 3346.3791684907],
    [0.00000022778, 6.02670962938, 9830.6328314713],
    [0.00000021875, 3.23482242791, 11243.9296639043],
    [0.00000019487, 4.05002877465, 3336.8454908673],
    [0.00000025048, 4.04459983417, 1648.2029397139],
    [0.00000019285, 5.68171337975, 3330.2195788335],
    [0.00000019206, 0.44033697686, 3351.49290953311],
    [0.00000019577, 5.5402051151, 6438.7400669091],
    [0.00000023713, 2.357759499, 796.0541893329],
    [0.00000018024, 2.37243714858, 3.2793008655],
    [0.00000017457, 5.61909053663, 6872.91693699471],
    [0.00000020758, 1.11119646396, 2914.2580533073],
    [0.00000023325, 4.38303926683, 1758.40926093329],
    [0.00000019762, 5.90704491623, 2818.2788260895],
    [0.00000018903, 0.13118670804, 3863.4336622771],
    [0.00000018548, 3.4351498502, 3343.8917275653],
    [0.00000020024, 3.66434113579, 9382.18381126891],
    [0.00000023004, 1.24456792545, 13359.1704059337],
    [0.00000020686, 4.47763433062, 6702.2440663755],
    [0.00000017546, 5.48185771093, 3074.24920246151],
    [0.00000021953, 1.45487277078, 10713.75106384269],
    [0.00000022478, 4.93708763645, 3531.81687532789],
    [0.00000017443, 1.52686638431, 7063.87756813929],
    [0.00000016475, 3.32396294407, 8432.52056733209],
    [0.00000016284, 3.03747056649, 6298.57213865991],
    [0.00000016296, 1.33599982138, 10551.7720626775],
    [0.00000021367, 5.09084614486, 4292.0870154669],
    [0.00000015862, 1.17152126786, 3723.26514143949],
    [0.00000016182, 5.51657199394, 7632.6994421667],
    [0.00000018728, 3.30231901555, 4032.52621044309],
    [0.00000017711, 5.62352752655, 10818.3791043993],
    [0.00000016214, 0.64104308804, 3607.46328590511],
    [0.00000020207, 5.21669629085, 2708.07250487011],
    [0.00000017851, 3.90780341044, 6836.8890703173],
    [0.00000014367, 1.90616251659, 8429.4850839501],
    [0.00000016523, 0.57557849919, 6158.8912527893],
    [0.00000019608, 1.94522419099, 853.4401992355],
    [0.00000014968, 5.74996412926, 6531.9054737485],
    [0.00000013797, 0.79312255069, 419.72846135871],
    [0.00000013414, 4.51615928517, 3127.0695137783],
    [0.00000015245, 0.67463983149, 7064.3652031063],
    [0.00000015674, 2.89380716586, 3333.8100074853],
    [0.00000013513, 3.61353175693, 6685.0590995349],
    [0.00000016177, 5.55617497884, 5729.7502646325],
    [0.00000016167, 4.0650417779, 6144.6641587877],
    [0.00000013924, 3.03881519646, 12936.0953334067],
    [0.00000012758, 0.71728265214, 3336.9749088253],
    [0.00000016755, 0.87447011602, 3973.6399834965],
    [0.0000001274, 5.40649102919, 3344.73757954131],
    [0.00000015216, 3.70357996455, 5459.6201045617],
    [0.00000013755, 3.67924088742, 433.9555553603],
    [0.00000013727, 4.13790239727, 6127.8992680407],
    [0.00000016418, 3.85207670396, 75.0254160508],
    [0.00000012379, 4.87573415701, 2487.1722274643],
    [0.00000012121, 3.30257314405, 3980.7535304973],
    [0.00000012145, 3.07029009464, 3281.4823822697],
    [0.00000016915, 1.87976030933, 10404.48999483909],
    [0.00000013732, 3.17849954583, 6677.8782422313],
    [0.00000012163, 5.94119470839, 10973.3118688665],
    [0.00000011839, 3.05197069508, 3400.23010609691],
    [0.0000001346, 0.01339869768, 1596.43025976811],
    [0.0000001195, 0.72333324885, 1744.1821669317],
    [0.00000014031, 3.20900224186, 8031.3360805419],
    [0.00000013621, 4.01984912325, 3415.63784275061],
    [0.0000001189, 3.44240756999, 4989.3030013807],
    [0.00000011133, 3.95045133494, 8270.5415661669],
    [0.00000011115, 1.68346953337, 6816.53375091851],
    [0.00000010961, 1.29021416023, 110.45013870291],
    [0.00000012029, 2.4878194281, 1751.7833488995],
    [0.00000012954, 3.09490820262, 8969.8127143945],
    [0.00000012975, 2.11989840845, 3266.074645616],
    [0.00000013898, 5.14618871897, 6546.4035908477],
    [0.00000010787, 2.11806328265, 11770.0975106499],
    [0.00000013676, 3.07870529532, 3347.90248088131],
    [0.00000014429, 1.92454286503, 6041.08374960209],
    [0.00000010265, 3.57928773201, 5099.50932260011],
    [0.00000010855, 5.6054018872, 3316.97780643551],
    [0.00000013203, 0.19791164589, 8955.58562039291],
    [0.0000001075, 0.51835327782, 3364.7346819311],
    [0.00000012106, 4.95253802158, 6.86972951729],
    [0.00000010745, 1.75142473456, 16173.6149858879],
    [0.00000010862, 4.59591535215, 7633.1870771337],
    [0.0000001313, 4.64408283563, 6688.5822178839],
    [0.00000012618, 0.44972794093, 3443.94901840191],
    [0.00000010348, 2.48573429062, 5884.68302909969],
    [0.00000011408, 5.58895311057, 3237.7634699647],
    [0.00000010014, 0.21528796338, 3893.93801205869],
    [0.0000001333, 4.53273448064, 11371.4608722747],
    [0.0000000939, 4.70787699498, 6151.2900708215],
    [0.00000009317, 4.47268149096, 3304.8283775059],
    [0.00000009588, 2.36418014273, 14584.5420906041],
    [0.00000009187, 1.65111069662, 3376.88411086071],
    [0.00000008922, 2.4489601342, 8274.0646845159],
    [0.00000012186, 6.0203612308, 10014.9675505821],
    [0.00000008852, 0.78017288566, 2921.37160030811],
    [0.00000011498, 1.82027521748, 3024.4643745267],
    [0.00000008932, 0.4761605805, 3340.4361680897],
    [0.00000008932, 5.64760633814, 3341.27632027691],
    [0.00000010791, 2.77302371275, 13362.2058893157],
    [0.0000001044, 4.29767407547, 3657.24811383991],
    [0.00000010488, 0.76119276539, 12168.2465140581],
    [0.00000007791, 4.94235946787, 162.2228186487],
    [0.00000008278, 6.07340700806, 6605.2025996075],
    [0.0000000773, 6.04134808195, 7235.0380737255],
    [0.00000010793, 0.90852791213, 135.30889751891],
    [0.00000009855, 0.50508691053, 951.9622237341],
    [0.0000000757, 5.85095682416, 1861.5020351519],
    [0.00000007347, 5.45188972477, 3760.3408880585],
    [0.00000007458, 3.50693253979, 11371.9485072417],
    [0.00000007415, 1.06538367574, 10575.1628654583],
    [0.00000007387, 4.04748411837, 7373.62627210991],
    [0.0000000733, 5.09163920237, 13362.7107779349],
    [0.00000007563, 2.586739103, 3134.67069574611],
    [0.00000008273, 5.52944425917, 633.0275567967],
    [0.00000009017, 3.31603055267, 6784.5614451017],
    [0.0000000733, 3.06086757088, 13362.6762706305],
    [0.00000006892, 2.23117060751, 3170.1833735641],
    [0.00000009499, 0.28342373247, 191.6920835951],
    [0.0000000839, 1.78738551777, 12566.3955174663],
    [0.00000007258, 3.50543277363, 3547.0417926205],
    [0.00000007563, 1.86781369518, 3209.3142824969],
    [0.00000007609, 3.51290916963, 3304.25087887911],
    [0.0000000749, 1.30636174884, 6924.1972748571],
    [0.00000006532, 4.34833038552, 1118.5119746193],
    [0.00000006446, 1.91072140138, 3340.4263610566],
    [0.00000006446, 4.21304551726, 3341.28612731],
    [0.00000008809, 2.38729963716, 8827.6340873583],
    [0.00000006453, 3.89231889829, 3511.5291148025],
    [0.00000007497, 2.61086786245, 3377.4616094875],
    [0.00000006647, 6.1293006788, 1376.0176173293],
    [0.00000006444, 0.76608645809, 1479.11039154791],
    [0.00000006777, 0.9404227568, 1194.2031927411],
    [0.00000006272, 2.60939993697, 11243.44202893729],
    [0.00000007647, 4.24404085436, 11081.46302777211],
    [0.00000006372, 4.42614040426, 8827.14645239129],
    [0.00000008206, 0.63888089259, 7234.5504387585],
    [0.00000006106, 1.65903263989, 10184.06009874809],
    [0.00000006255, 1.27116212393, 956.53297345411],
    [0.00000006895, 4.25463819285, 3472.39820586971],
    [0.00000005956, 5.42533370697, 641.12142486571],
    [0.00000006342, 4.38723597534, 1162.7185218913],
    [0.00000008015, 4.17209419953, 5828.2722891311],
    [0.00000006858, 6.08696943259, 5085.2822285985],
    [0.00000005564, 2.9542085706, 949.4194264533],
    [0.00000005685, 1.4873973027, 13915.77529215809],
    [0.00000005989, 1.27210341857, 13760.8425276909],
    [0.00000006614, 2.59817425884, 5099.0216876331],
    [0.00000006046, 4.28381801697, 18984.5364474931],
    [0.00000005388, 4.75457886592, 1228.7182958387],
    [0.00000006477, 4.76369580716, 2177.8939048085],
    [0.00000006716, 5.99595862554, 5084.7945936315],
    [0.00000006834, 2.3032744213, 6606.6870723158],
    [0.00000006185, 5.40821565539, 220.6564599223],
    [0.00000005372, 0.17118392777, 2766.5114458485],
    [0.00000006939, 3.86951988876, 8329.9154280805],
    [0.0000000525, 2.86332649708, 224.5886131854],
    [0.00000005178, 1.81203706439, 3274.36883526891],
    [0.00000005636, 3.05816376185, 9866.66069814871],
    [0.00000005018, 4.30701144279, 3407.3436530977],
    [0.00000006287, 2.70767720037, 2222.1004520805],
    [0.00000006027, 5.86363508643, 3340.3513555641],
    [0.00000006581, 3.78955993789, 38.3768531213],
    [0.00000006293, 4.17674637169, 8440.1217492999],
    [0.00000004882, 1.00486095714, 10404.9776298061],
    [0.00000004795, 0.36427947507, 4407.3517213733],
    [0.00000006476, 3.29629751497, 3297.1373318783],
    [0.00000006362, 2.82771763572, 3384.5751564883],
    [0.00000005306, 2.7081332254, 206.42936592071],
    [0.00000006484, 4.73121616424, 7108.06686175911],
    [0.00000004752, 5.47348414235, 6261.9840270079],
    [0.00000006261, 0.59716322071, 1964.5948093705],
    [0.00000005039, 2.43909809375, 6247.7569330063],
    [0.00000006027, 1.61122140965, 3340.38586286849],
    [0.00000004586, 2.9363786092, 6709.91785835091],
    [0.00000004635, 6.08947141473, 263.3277408563],
    [0.0000000487, 3.87407090566, 4393.1246273717],
    [0.00000006261, 2.83172709667, 26088.1469590577],
    [0.00000004434, 3.32464019476, 155.6642169177],
    [0.00000004383, 1.48980830926, 6666.2161996981],
    [0.00000004389, 1.03247430987, 13149.3944288447],
    [0.00000004433, 6.22122951581, 2807.6421607397],
    [0.0000000498, 2.89384649269, 5827.78465416409],
    [0.00000004443, 5.95476217838, 3915.2010425181],
    [0.00000004299, 0.75007520827, 8962.2115324267],
    [0.00000004356, 1.14577413888, 10235.3801930209],
    [0.00000004498, 1.91438448815, 553.8132203259],
    [0.00000005019, 4.13208637738, 3738.51761262449],
    [0.00000004315, 3.27234333766, 3877.6607562787],
    [0.00000004072, 3.33901445618, 574.10098085129],
    [0.00000004107, 3.07058211212, 10021.1007765147],
    [0.00000003964, 1.61309186306, 3495.78900865049],
    [0.00000004785, 0.27642621276, 2699.9786368011],
    [0.00000005396, 0.07454063526, 14313.9242955663],
    [0.00000003822, 0.64534260204, 3490.4194413179],
    [0.00000004095, 4.40659363743, 10023.06141865111],
    [0.00000003697, 4.79643368803, 6571.2623496637],
    [0.00000003779, 2.89531499128, 13517.62628874989],
    [0.0000000386, 2.04716548704, 6836.40143535029],
    [0.00000004702, 2.45248163598, 2111.8941308611],
    [0.0000000363, 0.00915212983, 11769.6098756829],
    [0.00000004499, 0.82553557194, 13524.67252544789],
    [0.00000003497, 4.11625604633, 6282.83203250789],
    [0.00000003489, 4.20101724067, 11216.5281078075],
    [0.00000003591, 6.26737509852, 3874.07032762691],
    [0.00000003976, 2.17190102533, 2804.05173208791],
    [0.0000000468, 4.90769516889, 10973.7995038335],
    [0.00000003961, 0.18319392811, 6048.6849315699],
    [0.00000003954, 3.83351307387, 6653.0194834153],
    [0.00000003352, 0.48662889418, 8425.8946552983],
    [0.00000004016, 5.8396139663, 3981.73385156551],
    [0.00000003356, 4.65730182486, 9168.88471583091],
    [0.0000000426, 3.10890117595, 3333.2550622155],
    [0.00000003936, 2.60585567874, 6843.4476720483],
    [0.00000003767, 0.71635417612, 26725.1432310819],
    [0.00000003388, 3.58080763162, 18454.8454823985],
    [0.00000003337, 4.78188036655, 13936.5506876505],
    [0.0000000323, 0.84980496278, 262.84010588929],
    [0.00000004019, 5.32092079015, 6696.72114206811],
    [0.00000003967, 0.18799481688, 266.85085920531],
    [0.00000003932, 5.32627876219, 2384.0794532457],
    [0.00000003087, 5.35381754909, 5202.6020968187],
    [0.00000003922, 3.38887523411, 4459.61203628611],
    [0.00000003717, 3.00241667255, 2906.6568713395],
    [0.00000003266, 1.14686627484, 16305.1569475743],
    [0.00000003104, 6.26686342256, 5305.6948710373],
    [0.00000003, 3.55062935508, 10714.23869880971],
    [0.00000003921, 2.47083832508, 10177.01386205009],
    [0.00000003084, 1.63553589002, 1059.1381127057],
    [0.00000003253, 1.65815244061, 5518.9939664753],
    [0.00000002861, 4.91663574228, 1331.8110700573],
    [0.00000003304, 1.02799621733, 8672.21368792411],
    [0.00000002975, 0.03645619502, 10575.6505004253],
    [0.00000002756, 0.6859298965, 6040.5910635009],
    [0.0000000295, 3.68233121776, 6944.5525942559],
    [0.00000003005, 0.80186680463, 2707.58486990309],
    [0.00000002717, 4.19242288497, 6519.0020347509],
    [0.00000002801, 3.31637382659, 16858.23871544969],
    [0.00000002897, 2.39765481455, 2700.9589578693],
    [0.00000003274, 5.89447455545, 2920.8839653411],
    [0.00000002645, 3.89694393584, 5989.3110696563],
    [0.00000003228, 2.76066844405, 647.25465079831],
    [0.00000002528, 0.08269800947, 13171.2452581711],
    [0.00000003531, 6.23552426531, 3190.80541208169],
    [0.0000000259, 4.84869275207, 5725.1795149125],
    [0.00000002501, 3.06554091162, 383.1403497067],
    [0.00000002483, 2.30179982047, 3313.45468808651],
    [0.00000002456, 3.82204304981, 3368.25780028011],
    [0.0000000245, 3.18294245687, 5732.2930619133],
    [0.00000002623, 1.58355072138, 16699.7828326335],
    [0.0000000301, 1.80619032361, 2008.8013566425],
    [0.00000003148, 3.00255938689, 3097.64000524229],
    [0.00000002412, 0.20563592554, 3561.26888662211],
    [0.00000002837, 3.54825853722, 4569.3307225385],
    [0.00000002416, 0.73041207552, 13362.7608345855],
    [0.00000002532, 3.29257381257, 6475.28312244591],
    [0.00000002407, 1.91810131323, 134.8212625519],
    [0.00000002351, 2.54653063726, 17925.1545173039],
    [0.00000003311, 5.13364869654, 17277.16311435029],
    [0.00000002384, 4.42145865201, 9485.2765854875],
    [0.0000000232, 3.88497277059, 14712.5609339415],
    [0.0000000235, 5.79681206289, 533.45790092711],
    [0.00000002433, 2.40535740363, 3171.2760610503],
    [0.0000000286, 3.63565692925, 4569.8183575055],
    [0.00000002382, 1.05697861132, 15508.8589407579],
    [0.00000002274, 1.39549918259, 6686.9915951905],
    [0.00000002448, 3.02014673677, 6418.38474751031],
    [0.00000002223, 4.42688952943, 10595.9382609507],
    [0.00000002362, 3.60748801511, 6843.9353070153],
    [0.00000002247, 5.4724671773, 3338.1047335723],
    [0.00000002247, 0.65129974134, 3343.60775479431],
    [0.00000002877, 5.31092659214, 3870.0595743109],
    [0.00000002167, 0.11779930741, 2126.1212248627],
    [0.00000002861, 0.41825730841, 3342.34071689161],
    [0.00000002948, 5.86603214726, 6414.8616291613],
    [0.00000002832, 5.70194885568, 3339.371771475],
    [0.00000002257, 2.42684789077, 14054.8511255095],
    [0.00000002582, 0.96409333017, 16706.8290693315],
    [0.00000002284, 3.72042741576, 3510.4364273163],
    [0.00000002213, 5.79088907317, 3120.4436017445],
    [0.00000002518, 3.55412857109, 12722.7962379687],
    [0.00000002156, 3.68823477654, 1795.5022612045],
    [0.0000000212, 1.86086651852, 14712.07329897449],
    [0.00000002894, 4.68726480342, 661.4767442645],
    [0.00000002197, 1.25938311277, 7314.2524101963],
    [0.00000002352, 5.40138877221, 6675.9457465757],
    [0.00000002592, 1.9957662247, 846.3266522347],
    [0.00000002011, 4.10915276822, 7800.22446298591],
    [0.00000002009, 5.79546041665, 1592.3521961493],
    [0.00000001985, 5.95943507005, 14158.9915310991],
    [0.00000002025, 4.72625136485, 16460.08971204149],
    [0.00000002756, 6.08539056721, 9872.5179004483],
    [0.00000002586, 2.46711824817, 15110.7099373497],
    [0.00000001977, 3.94114619904, 3340.3012989135],
    [0.00000002046, 1.08671847901, 1214.4912018371],
    [0.00000002049, 3.11791083516, 1545.1101654953],
    [0.00000002016, 4.23253609288, 6701.8239902819],
    [0.00000002591, 3.35704415242, 4459.12440131909],
    [0.00000001944, 6.27867442308, 793.0187059509],
    [0.00000001969, 5.69710526556, 8543.2145235185],
    [0.00000002221, 2.56014354281, 6661.11335148431],
    [0.00000002185, 4.81676561022, 10042.8564930753],
    [0.00000001909, 1.94360908246, 14054.36349054249],
    [0.00000002355, 0.64545768145, 6461.0560284443],
    [0.00000001945, 0.52827400374, 12296.1980470927],
    [0.00000001856, 0.39994658659, 3417.1223154589],
    [0.00000001964, 2.16479993477, 3230.64992296391],
    [0.00000001841, 3.38387944568, 16276.7077601065],
    [0.00000001867, 3.44547235502, 6438.2524319421],
    [0.00000002124, 0.31401256569, 14.47091148511],
    [0.00000001889, 1.27160767434, 2946.2303591241],
    [0.00000002273, 2.67716254538, 10001.3057020905],
    [0.00000001977, 3.53264979384, 3340.43591951909],
    [0.00000001852, 2.83643169906, 2751.79141717511],
    [0.00000001888, 3.59823741934, 3502.8352453485],
    [0.00000001924, 4.40431574367, 205.9417309537],
    [0.000000019, 3.87884336092, 9778.8648586419],
    [0.0000000184, 3.26125681857, 6457.1238751812],
    [0.00000002215, 0.91618144, 9499.5036794891],
    [0.00000001806, 0.61464681346, 2676.10019905331],
    [0.00000001805, 0.77929673675, 6692.10533623291],
    [0.00000001869, 5.13099640755, 13554.1417903943],
    [0.00000002416, 1.13890846236, 13362.62621397991],
    [0.00000002281, 2.28711563872, 6643.3356352453],
    [0.00000002183, 3.3702624184, 21.0192129759],
    [0.00000001774, 5.39406505365, 323.74923414091],
    [0.00000001748, 3.00013324119, 5033.0219136857],
    [0.00000001767, 6.23938721571, 4555.10362853689],
    [0.00000001973, 3.46063541883, 12310.42514109431],
    [0.00000002109, 0.54420400743, 7204.04608897691],
    [0.00000002169, 2.88513479695, 3148.9203431047],
    [0.00000001672, 0.98000755171, 6948.0757126049],
    [0.00000001685, 0.93633564467, 1434.9038442759],
    [0.00000002274, 1.89593685876, 17256.38771885789],
    [0.00000001724, 5.60400280415, 103.3365917021],
    [0.00000001921, 5.80837070052, 800.06494264891],
    [0.00000001651, 4.33969162257, 6756.2502694504],
    [0.0000000166, 3.37482712991, 9639.18456535971],
    [0.00000001575, 4.52126663062, 7910.4307842053],
    [0.00000001556, 3.74191499438, 743.23387801611],
    [0.00000001578, 3.90675545614, 5614.48555872609],
    [0.0000000208, 4.30362766877, 13119.47728534169],
    [0.00000002163, 5.24182574584, 28.6930049513],
    [0.00000001532, 5.50079852012, 4005.61228931331],
    [0.00000001548, 6.24677186455, 6578.3758966645],
    [0.00000002036, 5.86051117946, 9779.3524936089],
    [0.00000001534, 4.10234872019, 2679.62331740231],
    [0.00000001855, 4.01932968889, 1039.27042827391],
    [0.00000001554, 5.29488549205, 14314.4119305333],
    [0.00000001555, 4.98628025111, 10029.1946445837],
    [0.00000001553, 2.32869255037, 4194.0526259353],
    [0.00000001869, 5.29706229752, 3113.3801113943],
    [0.00000001547, 0.07021288134, 13355.57997728191],
    [0.00000001463, 1.1394591184, 3362.70707350971],
    [0.00000001463, 4.98430780024, 3319.0054148569],
    [0.00000001468, 1.61396255568, 632.5399218297],
    [0.00000001867, 1.75651810408, 13892.3844893773],
    [0.00000001483, 4.22066351666, 2604.9797306515],
    [0.00000001445, 1.00907902882, 12994.9815603533],
    [0.00000001444, 3.5197899254, 10018.4906689311],
    [0.00000001862, 6.02925087361, 6670.8320055333],
    [0.00000001428, 4.48027025912, 9468.51169474051],
    [0.0000000144, 2.33087071634, 2641.5850959557],
    [0.00000001456, 3.27733973667, 3929.9210711915],
    [0.00000001515, 2.83774866672, 4922.8155924663],
    [0.00000001642, 5.89569866176, 9070.3626913323],
    [0.00000001501, 5.08513783174, 664.99986261351],
    [0.00000001434, 4.16618462135, 3283.9578692477],
    [0.00000001756, 4.31622529752, 4672.91113172411],
    [0.00000001552, 5.46763897576, 9887.0160175475],
    [0.0000000143, 3.95481187554, 10025.6715262347],
    [0.00000001459, 4.00723308991, 2693.3577759015],
    [0.00000001423, 5.14334385957, 19800.7021387413],
    [0.00000001403, 1.95714229211, 3397.7546191189],
    [0.00000001451, 1.35501835403, 13745.5900565059],
    [0.00000001366, 5.9891095412, 4555.59126350391],
    [0.0000000158, 5.04278942486, 699.02733074409],
    [0.000000017, 0.82624348118, 3568.3323769723],
    [0.00000001599, 3.45370180139, 3212.83740084591],
    [0.00000001492, 2.02328397399, 6155.3008241375],
    [0.00000001463, 4.1847888264, 1015.4192004007],
    [0.00000001302, 4.10311228163, 5625.6098590429],
    [0.00000001329, 4.49775879038, 3334.1725803092],
    [0.00000001329, 1.62600812826, 3347.53990805741],
    [0.00000001503, 4.97907412209, 3378.98927982111],
    [0.00000001397, 4.73682156749, 588.8210095247],
    [0.000000015, 5.8775229968, 3.6883357796],
    [0.00000001522, 2.67169732879, 3468.8750875207],
    [0.00000001286, 0.30381647283, 3152.93109642071],
    [0.000000016, 6.11940741732, 1905.70858242391],
    [0.00000001339, 4.42233255843, 2699.49100183409],
    [0.00000001563, 3.16953602104, 6674.4224341851],
    [0.00000001455, 4.0500609235, 8800.2325312615],
    [0.00000001337, 5.43427386744, 2277.4635606781],
    [0.00000001259, 1.69486250292, 3742.5283659405],
    [0.00000001315, 4.86859160776, 1191.1677093591],
    [0.00000001298, 1.66827735532, 17395.4635522093],
    [0.00000001692, 0.41630178717, 8646.30729773711],
    [0.00000001571, 3.60195764792, 3451.0625654027],
    [0.00000001377, 4.06860369404, 7255.3258342509],
    [0.00000001223, 3.70588064572, 17654.5367222661],
    [0.00000001272, 4.68637067309, 6997.8605405397],
    [0.00000001293, 3.67069875408, 10125.1738718015],
    [0.00000001205, 4.45065917256, 74.53778108379],
    [0.00000001193, 5.74461193872, 6685.3500062411],
    [0.00000001184, 5.62673019992, 2178.3815397755],
    [0.00000001175, 1.89792440951, 4076.7327577151],
    [0.00000001203, 4.18116497461, 11670.5278547803],
    [0.00000001334, 5.10766451811, 59.13004443009],
    [0.00000001144, 5.64496891715, 3191.29304704871],
    [0.00000001205, 3.32707601504, 6688.51490758111],
    [0.00000001228, 5.8060934208, 2391.6806352135],
    [0.00000001148, 2.44539933176, 4886.21022716211],
    [0.00000001116, 4.51745766455, 15.49628866851],
    [0.00000001253, 5.0555662104, 66.2435914309],
    [0.00000001122, 3.77962104036, 4040.12739241091],
    [0.00000001358, 5.34957633026, 7895.7160552367],
    [0.00000001102, 2.41366384952, 6365.0768012265],
    [0.00000001406, 2.80809369415, 9588.3693597061],
    [0.00000001171, 3.63626867502, 2772.0343701559],
    [0.00000001123, 0.29206000273, 19402.55313533309],
    [0.00000001128, 3.40923120609, 6622.0948089695],
    [0.00000001312, 3.60055878901, 3311.4267356473],
    [0.00000001312, 2.52320812963, 3370.2857527193],
    [0.00000001101, 4.21894828336, 3774.56798206011],
    [0.00000001088, 1.71898270137, 6148.2545874395],
    [0.00000001229, 0.96682659655, 3145.8848597227],
    [0.00000001354, 2.50280456655, 4136.66661603269],
    [0.00000001266, 4.04478089387, 6887.6542193203],
    [0.00000001192, 4.67129146326, 2284.5097973761],
    [0.00000001059, 4.36720591986, 1198.21394605711],
    [0.00000001222, 2.97121261302, 3184.4555236809],
    [0.00000001094, 4.64408209257, 2074.8011305899],
    [0.00000001086, 2.7500139017, 2325.1932262991],
    [0.00000001116, 4.29111524058, 11611.1539928667],
    [0.00000001041, 3.66185163778, 6684.5041542651],
    [0.00000001105, 4.51598444814, 5618.5636223449],
    [0.00000001218, 2.025751089, 10157.14617761831],
    [0.00000001292, 1.97917110685, 7909.94314923829],
    [0.00000001193, 1.05540356619, 6677.5873355251],
    [0.00000001011, 1.88468389957, 2494.28577446509],
    [0.00000001102, 3.69335958507, 7321.36595719711],
    [0.00000001001, 0.06352856156, 11766.5070819981],
    [0.00000001048, 5.71072902244, 12721.32828193349],
    [0.0000000099, 4.38329192789, 3181.91272640011],
    [0.00000001146, 3.15307281945, 3497.2569646857],
    [0.00000000991, 6.20825855106, 4140.6773693487],
    [0.00000001269, 3.62849885608, 3188.95896309811],
    [0.00000001254, 3.35511704434, 6034.4578375683],
    [0.00000001293, 0.35118272433, 1.7282901918],
    [0.00000001206, 3.76131577148, 6740.84253279671],
    [0.00000001073, 0.65876193854, 9389.2973582697],
    [0.00000001361, 0.12651635396, 9945.8150263073],
    [0.00000000977, 0.35688532237, 3319.52060371631],
    [0.00000000977, 5.76688159627, 3362.1918846503],
    [0.00000000969, 4.50332531081, 1272.9248431107],
    [0.00000001176, 5.72271210931, 9602.5964537077],
    [0.00000001347, 2.06226659912, 19514.2274125877],
    [0.00000001073, 4.2789171415, 6677.4579175671],
    [0.00000000968, 1.10386271982, 522.3336006103],
    [0.00000001192, 2.35359183418, 1222.09238380491],
    [0.00000001237, 4.15588129311, 5835.38583613191],
    [0.00000001057, 2.8651017157, 2597.3785486837],
    [0.00000000957, 4.82126145069, 6645.4408042057],
    [0.00000000971, 1.72322720325, 20809.2238071617],
    [0.00000000991, 0.53667136955, 131.7857791699],
    [0.00000001159, 5.13897713303, 9065.7919416123],
    [0.00000000943, 3.92998399256, 3337.31587218211],
    [0.00000000943, 5.33537557967, 3344.3966161845],
    [0.00000000929, 2.07665479133, 4002.0891709643],
    [0.00000000977, 2.1232079892, 2538.4923217371],
    [0.00000000938, 4.38862417624, 931.60690433531],
    [0.00000001272, 0.89864359772, 3302.7232085455],
    [0.0000000096, 2.48494556814, 3909.6781182107],
    [0.00000000909, 2.06818561261, 3326.62915018171],
    [0.00000000943, 3.30460394818, 3344.36210888011],
    [0.00000000943, 5.96075562405, 3337.3503794865],
    [0.00000000886, 5.16933736517, 36.84918278771],
    [0.0000000089, 5.17329864993, 169.3363656495],
    [0.00000000925, 1.82710060728, 1486.2239385487],
    [0.00000001156, 6.14753394741, 16061.94070863329],
    [0.00000000879, 4.09361898695, 3355.0833381849],
    [0.00000000965, 2.78306913812, 11614.6771112157],
    [0.00000000874, 5.05469151754, 316.14805217309],
    [0.00000000896, 2.06210457665, 2067.68758358909],
    [0.00000000856, 0.80926398517, 6705.3471086309],
    [0.000000012, 3.92852893712, 2971.1564282429],
    [0.00000001091, 1.08913615837, 9168.39708086389],
    [0.00000000871, 5.25187070471, 9380.71585523369],
    [0.0000000107, 0.04151072339, 426.3543733925],
    [0.00000001039, 0.35358307489, 4937.0426864679],
    [0.00000000968, 5.15755434693, 8959.1760490447],
    [0.00000000852, 4.7629569522, 8013.52355842391],
    [0.00000000868, 2.65646874925, 9947.2994990156],
    [0.0000000089, 4.75713511878, 6747.9560797975],
    [0.00000000834, 0.81428487363, 6681.0485947895],
    [0.00000001025, 3.72815532687, 3914.71340755109],
    [0.00000000838, 5.14987130454, 4672.42349675709],
    [0.00000000872, 3.76405979215, 11780.7341759997],
    [0.00000000998, 0.20481558928, 16335.59398705309],
    [0.00000000814, 3.39899123402, 16703.28869733031],
    [0.00000001043, 2.49679055688, 3492.7535252685],
    [0.00000000878, 1.88614535376, 3233.19272024471],
    [0.00000000814, 5.42976286552, 16703.3232046347],
    [0.00000000821, 6.23923688826, 3323.04372206531],
    [0.00000000821, 6.16771533756, 3358.6687663013],
    [0.00000000861, 1.36508818725, 170.4290531357],
    [0.00000000895, 4.50998682743, 8966.2222857427],
    [0.00000000809, 3.6912478722, 1045.3986536711],
    [0.00000000986, 1.91297797873, 9654.3691336535],
    [0.00000000841, 5.34788356637, 13745.10242153889],
    [0.00000000792, 5.67453205333, 7100.9533147583],
    [0.00000000779, 1.71726390662, 3499.7997619665],
    [0.00000000841, 4.237575813, 3448.5197681219],
    [0.00000000788, 4.57984307584, 14422.0754544719],
    [0.00000001013, 4.37752826226, 8859.60639317511],
    [0.00000001009, 5.94344429551, 6657.59023313531],
    [0.0000000103, 2.19490146324, 3710.5560601237],
    [0.00000000787, 3.72966883127, 3308.88393836651],
    [0.00000000787, 2.39409808737, 3372.8285500001],
    [0.00000000731, 4.80001676808, 2803.56409712089],
    [0.00000000725, 4.63534003691, 3229.6696018957],
    [0.00000000749, 3.40695752675, 4356.5192620675],
    [0.0000000072, 4.72118387969, 3553.66770465429],
    [0.00000000818, 4.94156802757, 802.1201049627],
    [0.00000000825, 4.27028104649, 3253.5480396435],
    [0.00000000793, 1.10166913023, 11.2895177474],
    [0.00000000864, 1.98924766986, 6717.49653756051],
    [0.00000000969, 3.71171404987, 20198.85114214949],
    [0.00000000917, 6.26799705299, 4776.0039059427],
    [0.00000000729, 0.68510465497, 22743.16556203289],
    [0.0000000073, 3.80010308022, 1063.14886602171],
    [0.0000000086, 4.68558303874, 242.4847864905],
    [0.00000000713, 5.54624640151, 20597.0001455577],
    [0.00000000694, 1.48839766697, 3452.04288647091],
    [0.00000000694, 2.41729529361, 20426.8149099055],
    [0.00000000972, 0.41619109344, 13916.2629271251],
    [0.00000000692, 2.36886353379, 3068.1832868317],
    [0.0000000073, 1.007176002, 6016.7126257531],
    [0.00000000795, 1.85352942088, 3428.16444872311],
    [0.00000000686, 3.19891856733, 7255.8134692179],
    [0.00000000712, 4.030826108, 4143.2201666295],
    [0.00000000727, 1.63727295965, 2301.8296333929],
    [0.00000000836, 2.10217259723, 5642.4420600927],
    [0.00000000672, 6.19148373326, 2541.03511901791],
    [0.00000000725, 2.24638635812, 15907.0079441661],
    [0.00000000723, 3.92559293798, 3735.48212924251],
    [0.00000000659, 3.53381720449, 3929.4334362245],
    [0.00000000752, 0.95478219114, 401.91593924071],
    [0.0000000079, 1.64321327327, 10264.80970155691],
    [0.00000000833, 4.84897766851, 6040.10342853389],
    [0.00000000652, 1.55854352865, 3212.90471114871],
    [0.00000000634, 1.60225347298, 17101.4549543907],
    [0.00000000636, 1.39983508111, 17468.6113804619],
    [0.00000000831, 1.33700488395, 2409.4931573315],
    [0.0000000067, 1.27561899722, 15663.79170522509],
    [0.00000000636, 2.42884882731, 5938.4786103505],
    [0.00000000767, 2.91814761459, 16702.81831601549],
    [0.00000000649, 4.45940266951, 485.72823530609],
    [0.0000000072, 2.60100369454, 316.6356871401],
    [0.00000000685, 2.6060382932, 1437.41943168211],
    [0.00000000874, 0.29522273247, 3264.10253794069],
    [0.00000000631, 2.35025144285, 3351.9019444472],
    [0.00000000631, 3.77351547579, 3329.8105439194],
    [0.00000000617, 3.73864973279, 3613.52920153491],
    [0.00000000631, 4.86274156896, 3343.3990414641],
    [0.00000000834, 5.98573063128, 6681.88874697671],
    [0.00000000618, 0.72391686286, 6357.9632542257],
    [0.0000000062, 5.79698007436, 2301.34199842589],
    [0.00000000619, 4.56320107291, 3468.8077772179],
    [0.00000000856, 4.36779410619, 6254.38284504009],
    [0.00000000779, 4.63361737844, 22325.1488741929],
    [0.00000000621, 2.12407908062, 22345.0165586247],
    [0.00000000683, 1.63122853655, 3344.7883974464],
    [0.00000000683, 4.49253838209, 3336.92409092021],
    [0.00000000637, 5.5753990747, 151.2914873264],
    [0.000000006, 1.0784289625, 3338.31344690251],
    [0.00000000737, 3.73325950825, 3116.0238135144],
    [0.00000000843, 2.10475762774, 24149.8362338615],
    [0.00000000595, 3.87033280802, 4039.6397574439],
    [0.00000000621, 5.11737826788, 10448.6792884589],
    [0.00000000649, 4.60002553992, 148.32254190981],
    [0.00000000706, 2.94874370922, 6718.0740361873],
    [0.00000000615, 0.53197546397, 1169.83206889211],
    [0.00000000597, 2.20115039035, 2494.77340943211],
    [0.0000000058, 5.84100904608, 3528.7813919459],
    [0.0000000068, 4.34833986391, 1990.5011995575],
    [0.00000000593, 4.91377983956, 9491.90249752129],
    [0.00000000704, 1.04292136685, 3547.5569814799],
    [0.00000000602, 4.5511698104, 6681.8985540098],
    [0.0000000075, 1.36158314223, 6020.2357441021],
    [0.00000000672, 5.83404606009, 6667.2415768815],
    [0.00000000691, 5.87625321159, 6679.9841981748],
    [0.00000000644, 0.37424036712, 4290.0318531531],
    [0.00000000778, 1.28111197179, 394.86970254271],
    [0.00000000606, 4.1819627717, 736.1203310153],
    [0.0000000062, 0.82186565514, 1265.81129610991],
    [0.0000000061, 2.84065225726, 18451.3223640495],
    [0.00000000602, 1.3315868229, 20.11150191529],
    [0.00000000579, 3.37741350534, 2391.1930002465],
    [0.00000000574, 2.39068880559, 9381.69617630189],
    [0.00000000585, 0.31150564344, 2170.7803578077],
    [0.0000000061, 5.2303516142, 9911.8747763635],
    [0.00000000648, 1.07812115183, 4133.6311326507],
    [0.00000000583, 2.93573448932, 8226.8226538619],
    [0.00000000602, 2.63811772346, 2854.8841913937],
    [0.00000000555, 1.28385325545, 16865.28495214769],
    [0.000000006, 3.16504307436, 6725.18758318811],
    [0.00000000766, 6.18120893749, 4775.5162709757],
    [0.00000000577, 6.22738837569, 3184.9482097821],
    [0.00000000587, 4.000482176, 3194.0445576597],
    [0.00000000613, 2.32601770677, 6549.9267091967],
    [0.00000000696, 1.72938927515, 19004.4041319249],
    [0.00000000634, 2.56924738035, 6510.7958002639],
    [0.00000000634, 5.87239329301, 52176.0501006319],
    [0.00000000603, 0.76915482449, 7896.20369020371],
    [0.00000000658, 4.03985639725, 4988.8153664137],
    [0.00000000602, 2.24884569451, 6681.0387877564],
    [0.0000000052, 4.39804549459, 6467.68194047809],
    [0.00000000522, 3.85398776894, 3339.67560153121],
    [0.00000000522, 2.2697791497, 3342.03688683541],
    [0.00000000528, 6.13807593625, 109.9625037359],
    [0.00000000518, 1.01552893939, 1588.82907780029],
    [0.00000000553, 2.12188487764, 3487.66793070691],
    [0.00000000513, 5.35880279382, 299.37021175271],
    [0.00000000715, 6.24466223093, 4503.3309485911],
    [0.00000000511, 1.27403519504, 16490.0068555445],
    [0.00000000505, 3.26917825567, 1063.55790093581],
    [0.00000000698, 4.50778101632, 43.9627297885],
    [0.00000000609, 5.07257884137, 3134.1555068867],
    [0.00000000645, 0.910395868, 1641.08939271309],
    [0.00000000542, 2.95381309465, 1596.36294946531],
    [0.00000000502, 0.8177024689, 12323.17927852529],
    [0.00000000569, 2.81477259914, 7380.2521841437],
    [0.0000000053, 5.77909278402, 1699.5230339867],
    [0.00000000491, 3.81613403345, 11140.8368896857],
    [0.00000000518, 0.78407846223, 3443.46138343489],
    [0.00000000545, 0.63879177759, 2288.58786099491],
    [0.00000000509, 4.4072432566, 6813.0106325695],
    [0.00000000489, 1.49622890471, 13575.9926197207],
    [0.00000000486, 5.88242172218, 2274.3607669933],
    [0.00000000579, 2.61247079255, 10177.5014970171],
    [0.00000000535, 3.3974655376, 9072.90548861311],
    [0.00000000536, 4.94179821214, 3198.6776171471],
    [0.00000000478, 4.20267589342, 114.6429243969],
    [0.00000000619, 3.39725211788, 13207.27312484851],
    [0.00000000527, 1.68494996905, 3392.13658204571],
    [0.00000000527, 4.43881694959, 3289.5759063209],
    [0.00000000491, 6.28008678733, 3393.1165590961],
    [0.00000000491, 6.12686543849, 3288.5959292705],
    [0.00000000518, 3.4924660408, 3826.82829697291],
    [0.00000000532, 0.09507953177, 1055.6935944096],
    [0.00000000475, 0.78614810441, 8116.6163326425],
    [0.00000000473, 1.65508157221, 4297.14540015391],
    [0.00000000483, 2.01690193894, 131.29814420289],
    [0.00000000483, 3.77260927689, 3346.9221598131],
    [0.00000000483, 2.35115764175, 3334.79032855351],
    [0.0000000046, 2.87268342392, 2281.00393267929],
    [0.0000000046, 0.84191179243, 2280.9694253749],
    [0.00000000488, 4.31100288665, 5195.48854981791],
    [0.00000000604, 5.04421729659, 2373.8853667477],
    [0.00000000491, 4.01235585068, 11251.04321090511],
    [0.00000000482, 4.40675290422, 23.63462026429],
    [0.00000000455, 2.71373528596, 8962.7164210459],
    [0.00000000455, 0.68296365446, 8962.68191374151],
    [0.00000000455, 1.64431901546, 5408.78764525591],
    [0.00000000458, 2.77929810066, 6313.7567069537],
    [0.00000000525, 5.13528927698, 3535.8276286439],
    [0.00000000506, 1.1817619851, 3483.03487121951],
    [0.00000000453, 2.02140364445, 2957.9769656123],
    [0.00000000633, 5.05095677926, 2963.4826362675],
    [0.00000000532, 3.95191769037, 11773.13299403189],
    [0.00000000502, 3.05311243509, 5562.7128787803],
    [0.00000000487, 4.09057830717, 2548.0813557159],
    [0.00000000604, 3.35425011302, 3311.3644258799],
    [0.00000000604, 2.76951680562, 3370.34806248671],
    [0.00000000448, 3.40867489514, 13361.7132032145],
    [0.00000000455, 0.48237701031, 227.7199502725],
    [0.000000005, 0.9674015858, 4819.7228182477],
    [0.00000000452, 4.6208103372, 6851.04885401611],
    [0.00000000503, 4.80675483426, 382.6354610875],
    [0.0000000044, 3.12228465063, 3565.2010398852],
    [0.00000000607, 4.73491284511, 5195.0009148509],
    [0.00000000477, 4.42588307343, 4379.8828549737],
    [0.00000000468, 3.7534201479, 4186.9390789345],
    [0.00000000474, 3.156402198, 2295.2137730287],
    [0.0000000043, 0.16985042547, 4716.63004402911],
    [0.00000000536, 1.82311510964, 860.55374623631],
    [0.00000000561, 4.7898483835, 4272.21933103511],
    [0.00000000427, 2.36245310678, 1575.08961876571],
    [0.00000000456, 1.82684055018, 10006.8286263979],
    [0.00000000455, 5.22517487437, 1854.38848815109],
    [0.00000000421, 1.90113123366, 5753.6287023803],
    [0.00000000539, 0.59511976462, 3185.5031550519],
    [0.0000000044, 1.27528067077, 5490.5447790075],
    [0.00000000411, 5.01909523285, 2480.0586804635],
    [0.00000000433, 2.49733426085, 3376.41897865191],
    [0.00000000433, 3.62643265779, 3305.2935097147],
    [0.00000000448, 2.0409945604, 8955.09798542589],
    [0.00000000416, 1.0971071115, 23539.46356884929],
    [0.00000000423, 5.65906920843, 10037.33356876791],
    [0.00000000481, 5.74335395262, 6685.4008241462],
    [0.00000000538, 3.2379367674, 6637.7497585781],
    [0.00000000403, 2.02612411802, 394.38206757569],
    [0.00000000414, 1.17693488584, 3016.86319255889],
    [0.00000000402, 0.22194565664, 6151.7949594407],
    [0.00000000403, 1.22347336809, 18849.4713674577],
    [0.00000000402, 4.47435933232, 6151.76045213631],
    [0.0000000043, 0.28363407761, 2655.8121899573],
    [0.00000000435, 3.75918117164, 9375.0702642681],
    [0.00000000509, 5.52869427682, 3496.20933331471],
    [0.00000000548, 3.91428551746, 10184.5477337151],
    [0.00000000397, 4.10299095794, 3723.7355227543],
    [0.00000000406, 1.72717369149, 5750.1055840313],
    [0.00000000477, 2.15054075988, 6614.9812619687],
    [0.00000000555, 1.07130235791, 3718.2298520991],
    [0.00000000425, 4.00063826739, 7218.2731829785],
    [0.00000000408, 4.56425141121, 2149.4447173407],
    [0.00000000402, 2.74166202579, 1685.2959399851],
    [0.00000000411, 2.8579867488, 21265.7669440037],
    [0.00000000486, 3.27620484219, 10050.5302850507],
    [0.00000000394, 6.14977322791, 5888.6937824157],
    [0.00000000487, 3.8743732397, 1655.3164867147],
    [0.00000000421, 1.964109117, 13518.1139237169],
    [0.00000000395, 5.59740113398, 7366.02509014209],
    [0.00000000392, 5.68366955363, 17655.0243572331],
    [0.00000000443, 5.46161131426, 2075.28876555691],
    [0.00000000404, 3.65562985264, 6644.86330557891],
    [0.00000000381, 0.21743768465, 15805.90302195849],
    [0.00000000414, 0.69800253256, 7747.96414807311],
    [0.00000000395, 3.0704223481, 18606.25512851669],
    [0.00000000377, 4.4777309855, 8564.5501639855],
    [0.00000000475, 4.76974627664, 7380.7398191107],
    [0.00000000378, 1.07675159263, 9801.6684551441],
    [0.0000000043, 1.20468421989, 905.2128791813],
    [0.00000000384, 2.6756693158, 3205.30352918089],
    [0.00000000444, 3.40061961754, 2277.054525764],
    [0.00000000397, 5.66561964068, 515.70768857651],
    [0.00000000471, 4.3050110427, 7270.5334978913],
    [0.00000000367, 3.33137641644, 912.32642618209],
    [0.0000000043, 0.32262969033, 5881.6475457177],
    [0.00000000469, 2.72446532167, 7270.04586292429],
    [0.00000000433, 0.33076022458, 2284.9188322902],
    [0.00000000438, 3.55000511645, 9797.73630188101],
    [0.00000000506, 4.47192742031, 1765.5228079341],
    [0.0000000036, 1.93729428971, 20736.0759789091],
    [0.00000000395, 4.03209674497, 7697.1316887673],
    [0.00000000364, 1.26222637443, 3341.3489302845],
    [0.00000000379, 6.25338112517, 5641.9544251257],
    [0.00000000476, 2.98235844735, 1329.75590774351],
    [0.00000000473, 3.88576512895, 21795.4579090983],
    [0.00000000351, 4.13570973701, 6852.1415415023],
    [0.00000000351, 3.11111844946, 2547.5937207489],
    [0.00000000452, 0.50802021686, 6107.1238725483],
    [0.00000000344, 5.36725846777, 16894.7542170941],
    [0.00000000364, 0.71572042055, 6682.9531435914],
    [0.00000000344, 1.77948057276, 5483.4985423095],
    [0.00000000372, 3.08550618514, 1.22413855171],
    [0.00000000452, 1.07299009125, 4307.8271216189],
    [0.00000000349, 2.40546715957, 5636.3138346955],
    [0.00000000362, 5.00528267092, 27681.89692667289],
    [0.00000000376, 6.22222472073, 3339.38828814809],
    [0.00000000347, 2.47924829765, 25685.62898532449],
    [0.00000000351, 2.80467267603, 5452.50655756091],
    [0.00000000348, 1.66710324635, 16865.7725871147],
    [0.00000000345, 3.95198013706, 25287.47998191629],
    [0.00000000358, 3.05433541689, 14584.05445563709],
    [0.00000000336, 4.55900012579, 1882.83767561889],
    [0.00000000436, 3.55215974621, 21946.86755521649],
    [0.00000000434, 0.32562428989, 7214.68275432671],
    [0.00000000395, 4.16776570158, 9993.6319101151],
    [0.00000000351, 0.12634120978, 13213.1303271481],
    [0.00000000327, 4.04880436765, 3354.0980165813],
    [0.00000000327, 2.07496255099, 3327.61447178531],
    [0.00000000361, 0.39938152102, 3.34661116829],
    [0.00000000328, 6.15068258009, 2435.3995475185],
    [0.00000000447, 4.74470130101, 13363.67384535091],
    [0.00000000389, 1.05447612688, 30065.7556577817],
    [0.00000000326, 5.67270447514, 3264.59017290771],
    [0.00000000395, 1.7535868115, 3337.4004361371],
    [0.00000000339, 4.51134098176, 14557.1405345073],
    [0.00000000334, 4.48543603219, 147.0555040071],
    [0.00000000335, 2.3630528142, 20617.77554105009],
    [0.00000000347, 4.05789606388, 5223.93773728571],
    [0.00000000344, 5.8623373382, 4025.9002984093],
    [0.00000000314, 4.43830632328, 4142.7325316625],
    [0.00000000347, 5.76229830621, 3265.587010649],
    [0.00000000408, 6.10494233727, 11883.8269502183],
    [0.00000000317, 2.10770348226, 3347.4821562171],
    [0.00000000335, 1.82753658277, 544.1618765797],
    [0.00000000345, 3.53624871536, 5244.2930566845],
    [0.00000000318, 1.06713363481, 12302.8239591265],
    [0.00000000384, 4.30168263627, 7733.7370540715],
    [0.00000000402, 0.39385834298, 8982.5668518255],
    [0.00000000409, 5.51884193886, 23141.3145654411],
    [0.00000000335, 2.75373542682, 3061.06973983091],
    [0.00000000415, 3.99882051146, 12509.4971425307],
    [0.00000000355, 6.17230823937, 7322.34627826531],
    [0.00000000316, 5.59149424389, 3440.4259000529],
    [0.00000000316, 0.53227267475, 3241.28658831371],
    [0.00000000354, 0.6423515439, 4606.4237228097],
    [0.00000000347, 1.0572807517, 14127.99895376209],
    [0.0000000031, 5.64292624067, 6453.9925380941],
    [0.000000003, 2.21739482474, 1987.4657161755],
    [0.00000000304, 2.64756651462, 15265.64270181689],
    [0.00000000299, 4.05929485456, 10285.1650209557],
    [0.00000000379, 2.28257510001, 1461.29786942991],
    [0.00000000294, 1.92173439518, 20040.3952593333],
    [0.00000000295, 3.55293055978, 2487.6598624313],
    [0.00000000313, 1.30385633562, 6286.84278582391],
    [0.00000000307, 6.22295802105, 9755.4740558611],
    [0.00000000306, 4.47605572395, 8756.5136189565],
    [0.00000000313, 0.32862784398, 4982.18945437991],
    [0.00000000392, 1.48237112438, 19645.7693742741],
    [0.00000000361, 1.46103489347, 684.8002367425],
    [0.00000000328, 4.08465891668, 3284.0529820135],
    [0.00000000328, 2.03910800196, 3397.6595063531],
    [0.00000000291, 0.90669086212, 11986.91972443691],
    [0.00000000341, 4.17468651117, 18053.1733606413],
    [0.00000000345, 3.44122421521, 16063.4086646685],
    [0.00000000314, 2.64774700056, 9983.9480619451],
    [0.00000000331, 1.83529030284, 6680.99828956829],
    [0.00000000329, 2.14259666141, 2277.95119564511],
    [0.00000000301, 2.60539384966, 1251.0740137843],
    [0.00000000339, 5.86444938845, 2825.39237309031],
    [0.00000000339, 0.25931753019, 3856.3201152763],
    [0.00000000383, 3.28646629882, 2921.9318452827],
    [0.00000000302, 4.92028257129, 12825.8890121873],
    [0.0000000031, 0.61442486331, 2060.5740365883],
    [0.0000000031, 2.29827810873, 5622.1039943461],
    [0.00000000292, 0.82350537881, 17256.8753538249],
    [0.00000000286, 4.10458531999, 279.5426868689],
    [0.0000000033, 6.18523353093, 1073.85284167431],
    [0.00000000382, 1.17991122952, 3267.5591183243],
    [0.00000000382, 4.94385568912, 3414.1533700423],
    [0.00000000304, 3.37215064995, 3620.6427485357],
    [0.00000000326, 5.37060215981, 533.8669358412],
    [0.00000000322, 2.89731305468, 2388.6502029657],
    [0.00000000289, 1.22024545508, 36.27168416091],
    [0.00000000287, 5.56455691642, 5511.8804194745],
    [0.00000000283, 1.21251617045, 12840.1161061889],
    [0.00000000358, 6.21940014383, 568.5780565439],
    [0.00000000282, 3.87783929607, 595.9345565255],
    [0.0000000038, 1.92054508917, 2973.63191522091],
    [0.00000000283, 4.53197273536, 9859.6144614507],
    [0.00000000269, 0.82453120759, 15636.8104737925],
    [0.0000000028, 0.42006444847, 16511.8576848709],
    [0.00000000296, 0.76548268882, 1.24065522479],
    [0.000000003, 2.59187768206, 13525.1601604149],
    [0.00000000331, 6.08770397853, 6680.9637822639],
    [0.0000000031, 0.26750647724, 5622.06948704171],
    [0.00000000323, 0.38705213166, 2266.7595850255],
    [0.00000000284, 3.18215717131, 5085.3495389013],
    [0.0000000032, 1.27027711736, 10720.8646108435],
    [0.00000000317, 4.93342158277, 6048.1972966029],
    [0.00000000269, 2.88951641275, 2744.6778701743],
    [0.00000000318, 2.1839234159, 526.00262931501],
    [0.00000000257, 4.63373345906, 24341.28449997309],
    [0.00000000266, 0.45979732691, 206.9445547801],
    [0.00000000258, 1.79534054581, 8749.4000719557],
    [0.00000000271, 2.27668459594, 3345.42699390331],
    [0.00000000271, 3.8470823227, 3336.2854944633],
    [0.00000000301, 4.71479959051, 10706.63751684189],
    [0.00000000251, 3.96861026556, 3343.9592864387],
    [0.00000000251, 2.15515665308, 3337.75320192791],
    [0.00000000251, 3.37159956977, 9758.9971742101],
    [0.00000000267, 0.96036007447, 6831.0318680177],
    [0.00000000306, 1.36129297092, 12012.8261146239],
    [0.00000000249, 6.2810347648, 4246.3129408481],
    [0.00000000286, 4.90464379613, 1898.5950354231],
    [0.0000000032, 5.2373235336, 536.5606946119],
    [0.0000000029, 1.30201044096, 20047.4414960313],
    [0.00000000268, 1.47703232305, 16703.23864067971],
    [0.0000000025, 0.9535548607, 9698.5756809255],
    [0.00000000248, 1.11014026714, 4534.81561944089],
    [0.00000000246, 3.89895295515, 15651.03756779411],
    [0.00000000309, 0.93773869004, 1903.19299501769],
    [0.00000000247, 5.7395080802, 10016.5581732755],
    [0.00000000262, 0.38159181599, 4025.4126634423],
    [0.00000000312, 2.02014523279, 6033.9702026013],
    [0.00000000245, 2.61302130597, 2939.1841224261],
    [0.00000000317, 3.62639597567, 95.7354097343],
    [0.00000000256, 1.57197883241, 1727.90491115171],
    [0.0000000033, 2.97758477159, 735.6326960483],
    [0.00000000276, 4.96569192497, 6670.4229706192],
    [0.00000000321, 5.04537384488, 11905.1625906853],
    [0.00000000252, 3.55325819855, 5430.63847458231],
    [0.00000000252, 4.89937019626, 21548.7185518083],
    [0.00000000237, 2.58555430531, 194.7275669771],
    [0.00000000258, 2.68892316362, 9488.8670141393],
    [0.00000000269, 1.83869068629, 3867.0240909289],
    [0.00000000265, 2.90622523535, 3053.89388306271],
    [0.0000000024, 1.73397693635, 10027.6040218903],
    [0.00000000321, 2.82877270353, 3759.7806430839],
    [0.00000000319, 3.59115855791, 9815.8955491457],
    [0.00000000251, 0.12299632037, 1280.0383901115],
    [0.00000000239, 2.92878889718, 26481.92699214089],
    [0.00000000251, 5.02028762471, 2790.80995968991],
    [0.00000000326, 4.20511206757, 3708.0805731457],
    [0.00000000235, 3.75339605407, 5106.6228696009],
    [0.00000000293, 0.11701788048, 5628.7126527277],
    [0.00000000323, 4.8701801093, 17086.2024832057],
    [0.00000000311, 0.12778675025, 3290.0237848775],
    [0.00000000311, 5.99598016839, 3391.68870348911],
    [0.00000000242, 3.46289647182, 4996.4165483815],
    [0.00000000233, 5.27407567581, 2679.13568243529],
    [0.0000000023, 1.62592473181, 10654.8648368961],
    [0.00000000292, 5.65394034305, 3050.3707647137],
    [0.0000000023, 0.59794722074, 1744.24947723449],
    [0.00000000235, 2.10323754397, 5945.5921573513],
    [0.00000000301, 2.35280602608, 9495.9132508373],
    [0.00000000318, 1.27137347197, 2907.1445063065],
    [0.00000000229, 4.79342389836, 5.2791068239],
    [0.00000000248, 1.94277588124, 1442.0173912767],
    [0.00000000226, 5.71133491731, 1868.6155821527],
    [0.00000000234, 5.14378230022, 2817.7911911225],
    [0.0000000023, 0.30903741658, 4245.82530588109],
    [0.00000000312, 4.22313838923, 4403.76129272151],
    [0.00000000222, 1.2047643544, 1835.56843509031],
    [0.00000000277, 4.35456944772, 7079.1300393243],
    [0.00000000289, 0.65812694051, 6901.8813133219],
    [0.00000000244, 2.21534433966, 5349.4137833423],
    [0.00000000268, 1.0685359362, 16703.3732612853],
    [0.0000000025, 3.14710986353, 187.68133027909],
    [0.0000000022, 2.74511541811, 6511.88848775011],
    [0.00000000224, 6.18440878701, 3138.6028490092],
    [0.00000000224, 6.22254343881, 3543.1096393574],
    [0.00000000234, 0.06073372993, 17499.6039577989],
    [0.00000000256, 4.03736586899, 367.4681464459],
    [0.00000000272, 3.51718028747, 2428.2860005177],
    [0.00000000218, 1.49669828918, 2786.7992063739],
    [0.00000000218, 5.88795359173, 6283.3369211271],
    [0.0000000027, 0.24554568359, 11236.8161169035],
    [0.00000000218, 3.85718196023, 6283.3024138227],
    [0.0000000022, 3.19713485655, 3987.86707749811],
    [0.00000000238, 5.93039570689, 2814.68839743771],
    [0.00000000222, 0.36863892862, 1368.9040703285],
    [0.00000000215, 5.15532893112, 13383.4689197751],
    [0.00000000224, 2.11557791608, 77.9943614674],
    [0.00000000221, 3.2407383418, 3937.0346181923],
    [0.00000000226, 2.56787172746, 9279.0910370503],
    [0.00000000256, 3.53846540374, 10596.4258959177],
    [0.00000000211, 5.0409505666, 12200.2188198749],
    [0.00000000212, 0.14549328098, 2392.66095628171],
    [0.00000000216, 3.15925655175, 12928.98178640591],
    [0.00000000237, 3.21754149899, 3627.8186053039],
    [0.0000000022, 0.54824595868, 6530.4210010402],
    [0.00000000213, 6.27747523577, 1484.68867221069],
    [0.00000000262, 1.78468856574, 20.5315780089],
    [0.00000000254, 5.82038398953, 19146.51544865829],
    [0.00000000222, 5.95630142513, 8166.4011605773],
    [0.00000000263, 5.32304904255, 4531.7801360589],
    [0.00000000249, 2.58332253923, 3084.88586781131],
    [0.00000000239, 4.03784097782, 5095.9188939483],
    [0.00000000239, 4.03784097782, 5095.4312589813],
    [0.0000000027, 5.38756181061, 24889.33097850809],
    [0.00000000252, 3.0837959184, 3299.3054531985],
    [0.00000000252, 3.03997100024, 3382.4070351681],
    [0.00000000207, 2.83288102556, 5618.1545874308],
    [0.00000000239, 1.63889533266, 3344.31205222951],
    [0.00000000262, 0.46943815181, 3631.3417236529],
    [0.00000000206, 1.80106246742, 7083.14079264031],
    [0.00000000249, 0.73301708654, 2149.9323523077],
    [0.0000000021, 5.81059147043, 6678.7171602721],
    [0.00000000255, 1.55366452384, 1994.51195287351],
    [0.00000000204, 3.91362001245, 4694.2467721911],
    [0.00000000274, 4.79397197037, 12306.8347124425],
    [0.00000000262, 0.46979570624, 532.9702659601],
    [0.00000000214, 4.33780097919, 9623.4444592077],
    [0.00000000246, 6.01432530866, 151.65346360169],
    [0.00000000223, 2.9885974319, 3345.2182805731],
    [0.00000000223, 3.13516948674, 3336.4942077935],
    [0.00000000255, 5.28917502113, 2942.7244944273],
    [0.00000000224, 1.52423467945, 6533.3899464568],
    [0.00000000245, 5.50271392619, 2142.39848064269],
    [0.00000000201, 5.35589690383, 9360.8481708019],
    [0.00000000282, 1.08698948224, 12465.29059525869],
    [0.00000000199, 3.26141559083, 3030.01544531491],
    [0.00000000243, 4.23645604083, 9329.9234963561],
    [0.00000000233, 6.03479083951, 5834.8982011649],
    [0.00000000205, 4.30285175798, 7167.4407236727],
    [0.00000000199, 0.26993000031, 2957.4720769931],
    [0.0000000022, 6.00177151459, 5626.018893957],
    [0.00000000197, 4.96967459654, 3244.8770169655],
    [0.00000000197, 1.1540923221, 3436.8354714011],
    [0.000000002, 1.76538096369, 6567.0695639697],
    [0.00000000231, 2.63984097637, 6654.0671147863],
    [0.00000000228, 5.88325894864, 3319.59321372389],
    [0.00000000206, 4.62181012252, 7483.3449583623],
    [0.00000000206, 4.62181012252, 7483.8325933293],
    [0.00000000198, 3.92135089796, 3094.6045218603],
    [0.00000000215, 4.11109862806, 2540.5474840509],
    [0.00000000223, 3.01290266414, 13341.9181287903],
    [0.00000000199, 5.43950846422, 2409.00552236449],
    [0.00000000192, 0.74649040425, 6382.3422766139],
    [0.00000000205, 1.10304172891, 3890.9025286767],
    [0.00000000191, 0.61853752731, 2928.4851473089],
    [0.00000000191, 5.50522939133, 3753.22734105771],
    [0.00000000193, 1.07910361151, 117.5636857037],
    [0.00000000194, 4.47708903791, 18208.1061251085],
    [0.00000000197, 1.06976954616, 20206.3850138145],
    [0.00000000194, 4.3241061178, 28628.09240861609],
    [0.00000000212, 4.83851003745, 4538.8263727569],
    [0.00000000192, 4.11577520914, 3365.71500299931],
    [0.00000000192, 2.0079917095, 3315.9974853673],
    [0.00000000218, 1.22674306878, 2142.8861156097],
    [0.00000000226, 3.5404667651, 3596.8266205553],
    [0.00000000253, 5.60084432635, 5415.9011922567],
    [0.00000000187, 0.19756321336, 15107.1195086979],
    [0.00000000207, 4.52254146385, 419.2408263917],
    [0.00000000255, 3.25840338963, 2942.6899871229],
    [0.00000000191, 0.88275042024, 10544.6585156767],
    [0.0000000019, 5.78004681928, 28229.94340520789],
    [0.00000000205, 0.67775581231, 1059.60849402051],
    [0.00000000233, 4.30007127815, 5821.1587421303],
    [0.00000000187, 4.96787196527, 5401.18646328809],
    [0.00000000188, 5.93437329943, 3318.08774757391],
    [0.00000000188, 0.18939361921, 3363.62474079271],
    [0.00000000231, 2.52090864586, 9094.2411290801],
    [0.00000000194, 0.44841184856, 2736.0065034785],
    [0.00000000182, 1.33124042287, 5960.3294396769],
    [0.00000000193, 2.43212632306, 7417.3451844149],
    [0.00000000186, 5.05072922235, 11354.1359851237],
    [0.00000000181, 5.02122429267, 1754.8188322815],
    [0.00000000222, 6.00725418804, 3070.6587738097],
    [0.00000000181, 2.28299776534, 4356.03162710049],
    [0.00000000177, 2.86221640984, 3651.6970430517],
    [0.00000000189, 3.3791760554, 6673.8674889153],
    [0.00000000179, 3.47998233365, 15121.3466026995],
    [0.00000000232, 2.65931483985, 3517.54997431711],
    [0.00000000232, 3.46445207879, 3164.1625140495],
    [0.00000000217, 1.06468264448, 220.16882495529],
    [0.00000000176, 3.13334105652, 1903.6806299847],
    [0.0000000018, 0.82368576619, 3348.95011225231],
    [0.0000000018, 5.30008115245, 3332.7623761143],
    [0.00000000179, 2.20230995382, 3587.10796650631],
    [0.00000000205, 2.7085274438, 1059.6430013249],
    [0.00000000187, 1.04746838799, 2619.71701297711],
    [0.00000000176, 3.90353461991, 13465.7862985013],
    [0.00000000242, 2.50347875338, 5408.3000102889],
    [0.00000000178, 4.08581305127, 2973.14428025389],
    [0.00000000226, 2.22430722385, 11925.03027511709],
    [0.00000000174, 4.55814413103, 10096.8626961502],
    [0.00000000188, 3.92968463646, 2575.0631797369],
    [0.00000000175, 5.69586890519, 12299.7884757445],
    [0.00000000232, 3.14822069955, 5351.9565806231],
    [0.00000000174, 1.35135226191, 5243.80542171749],
    [0.00000000177, 5.85994870849, 6872.42930202769],
    [0.00000000177, 5.31676928648, 2573.0074248347],
    [0.0000000021, 0.98942403448, 6684.2201814941],
    [0.00000000175, 4.13281638704, 6708.8702269799],
    [0.00000000174, 4.83669668224, 3156.0063362131],
    [0.00000000182, 2.75035780857, 2011.3441539233],
    [0.00000000169, 3.5473361492, 6684.97453557991],
    [0.00000000173, 4.04338856638, 4885.72259219509],
    [0.00000000239, 5.36279832648, 31022.50935337269],
    [0.00000000169, 5.5781077807, 6685.0090428843],
    [0.00000000191, 3.61411273955, 11567.4350805617],
    [0.00000000207, 2.89825036062, 10001.72577818411],
    [0.00000000181, 1.80435450081, 8584.41784841729],
    [0.00000000189, 5.77298688672, 2783.76372299191],
    [0.00000000233, 1.82665762083, 23958.8756027169],
    [0.00000000219, 4.30571742396, 3070.7260841125],
    [0.00000000177, 3.00247820411, 2978.7351074525],
    [0.00000000179, 2.14367659492, 17232.9969160771],
    [0.00000000168, 1.23920780852, 1111.3984276185],
    [0.00000000172, 5.04827147433, 4061.99547538951],
    [0.00000000184, 6.11375809233, 12943.2088804075],
    [0.00000000179, 0.02775233109, 8852.4928461743],
    [0.00000000162, 0.40163918127, 16696.1924039817],
    [0.00000000163, 0.63420278502, 19676.20641375289],
    [0.00000000204, 2.58726231867, 4253.4264878489],
    [0.000000002, 0.11645066909, 3611.0537145569],
    [0.00000000188, 0.87802326806, 2385.61471958371],
    [0.00000000166, 0.44820712961, 24491.18197509989],
    [0.00000000168, 0.43137458003, 6166.0047997901],
    [0.00000000201, 3.99153837364, 3738.98799393931],
    [0.00000000184, 4.49082489107, 1155.6049748905],
    [0.00000000163, 5.9744185655, 3335.6570530175],
    [0.00000000163, 0.14934835314, 3346.0554353491],
    [0.00000000158, 4.963414379, 5490.05714404049],
    [0.00000000162, 5.12671205173, 272.42913986809],
    [0.00000000173, 1.70692023003, 4.1759707466],
    [0.00000000166, 4.69082020547, 21393.7857873411],
    [0.00000000175, 5.91635100503, 2757.8573328049],
    [0.00000000154, 5.97630069834, 4289.0515320849],
    [0.00000000214, 2.37710402682, 1386.13909381971],
    [0.00000000171, 0.07657131354, 10011.4444322331],
    [0.00000000156, 4.08867905453, 10081.4549594965],
    [0.00000000163, 0.4711290683, 13286.4274530071],
    [0.00000000155, 3.98476507217, 8771.2509012821],
    [0.00000000151, 4.45789668424, 15011.1402814801],
    [0.00000000155, 1.22574828411, 1879.31455726989],
    [0.00000000155, 4.17166988351, 2089.53841291549],
    [0.00000000194, 1.66101338255, 3361.1440047087],
    [0.00000000169, 4.62246895595, 7064.34794945411],
    [0.00000000166, 5.48604111479, 6719.6017065209],
    [0.00000000158, 3.13995226724, 8439.6341143329],
    [0.00000000151, 4.3310606862, 10228.2666460201],
    [0.00000000151, 1.25869310331, 3525.7061521535],
    [0.00000000149, 0.32471999674, 3664.3616608407],
    [0.00000000196, 1.82159362898, 3610.98640425411],
    [0.00000000166, 0.46110782427, 5466.7336515625],
    [0.00000000167, 1.32101864186, 10288.6881393047],
    [0.00000000156, 2.36180228155, 17394.97591724229],
    [0.00000000147, 5.85283339117, 14577.4285436033],
    [0.00000000147, 0.61306634906, 1898.57778177091],
    [0.00000000154, 0.19988862301, 11457.2287593423],
    [0.00000000172, 3.82461644501, 19617.3201868063],
    [0.00000000166, 1.16464294435, 6908.9448036721],
    [0.0000000016, 2.02061385417, 1346.10047382629],
    [0.0000000018, 3.88594579937, 5220.4146189367],
    [0.00000000159, 2.34893738617, 1505.04399160949],
    [0.00000000171, 0.89384833788, 4399.7505394055],
    [0.00000000178, 3.8883594492, 2807.1545257727],
    [0.00000000201, 6.02231000514, 3739.0225012437],
    [0.00000000148, 5.69880757278, 9154.1474335053],
    [0.00000000146, 5.33364778234, 13369.8070712835],
    [0.0000000017, 4.17129374991, 6677.9282988819],
    [0.00000000147, 0.30529245684, 9918.9883233643],
    [0.00000000147, 3.63211816839, 14481.4493163855],
    [0.00000000147, 3.04560054365, 6850.56121904909],
    [0.00000000159, 4.74259177074, 3334.99904188371],
    [0.00000000159, 1.3811751479, 3346.71344648291],
    [0.0000000015, 3.63738939165, 15110.22230238269],
    [0.00000000143, 5.81404981785, 13227.6284442473],
    [0.00000000189, 4.57066567683, 10042.4364169817],
    [0.00000000153, 3.12126478969, 3702.9773809141],
    [0.00000000168, 1.11741682536, 10032.71776293271],
    [0.00000000155, 1.9075007173, 369.9436334239],
    [0.00000000151, 0.91782780746, 1859.44687283811],
    [0.00000000163, 6.13295957527, 2965.09051261311],
    [0.00000000179, 1.03162162149, 3966.52643649571],
    [0.00000000179, 5.09214529715, 2715.1860518709],
    [0.00000000195, 2.27751350976, 16858.7263504167],
    [0.0000000014, 3.29302979467, 18461.9590293993],
    [0.00000000183, 5.08915245987, 6791.6749921025],
    [0.0000000015, 3.40313028042, 1879.8021922369],
    [0.0000000015, 3.63201414077, 2922.35192137631],
    [0.00000000182, 3.98532489687, 8005.92237645609],
    [0.00000000146, 0.34189409252, 2715.2311079861],
    [0.00000000165, 5.85176455035, 7346.22471601311],
    [0.00000000141, 5.49463411882, 3017.35082752591],
    [0.00000000191, 0.62441184949, 3202.2680457989],
    [0.00000000191, 5.49935506915, 3479.4444425677],
    [0.00000000139, 4.91449152787, 4846.1440532763],
    [0.00000000138, 1.09735180536, 1537.9966184945],
    [0.00000000193, 1.19262914799, 3650.1345668391],
    [0.0000000016, 2.225287418, 3394.16419046711],
    [0.0000000016, 3.89847950064, 3287.54829789951],
    [0.00000000193, 4.93382263995, 3031.5779215275],
    [0.00000000169, 4.56651889742, 4687.2005354931],
    [0.00000000155, 0.3484856143, 3897.9487653747],
    [0.00000000162, 6.22598832232, 5607.8596466923],
    [0.00000000136, 0.53418624988, 3336.7781805645],
    [0.00000000144, 5.67390729246, 3945.70598488811],
    [0.00000000155, 3.49137971151, 7799.73682801889],
    [0.0000000017, 6.2020653814, 6677.9628061863],
    [0.00000000155, 4.11217295378, 25136.0703357981],
    [0.00000000141, 2.26678508447, 6279.7965491259],
    [0.00000000174, 5.5873040035, 7586.43773258089],
    [0.00000000138, 3.20211134662, 6343.2259719001],
    [0.00000000176, 5.24754822584, 605.0935581883],
    [0.00000000167, 3.7118082726, 8337.0289750813],
    [0.00000000185, 0.86703648786, 27831.79440179969],
    [0.00000000151, 4.79464206123, 2281.05398932989],
    [0.00000000151, 4.63522367272, 8962.7664776965],
    [0.00000000136, 0.80562105416, 12729.9097849695],
    [0.00000000159, 3.23552569495, 8958.7670141306],
    [0.00000000151, 5.04372005956, 8962.63185709091],
    [0.00000000151, 5.20313844808, 2280.9193687243],
    [0.00000000137, 1.47758341153, 6703.3195002095],
    [0.00000000159, 0.16489389211, 8966.6313206568],
    [0.00000000132, 4.6978901043, 12171.7696324071],
    [0.00000000136, 4.02250108722, 8696.0921256719],
    [0.00000000143, 2.19306681905, 4106.6493086297],
    [0.0000000014, 1.26260069331, 27.15773861329],
    [0.00000000179, 5.37712995429, 5724.6918799455],
    [0.00000000133, 0.03147377213, 21150.56954840009],
    [0.00000000131, 1.45458200748, 948.9317914863],
    [0.00000000132, 5.47773606981, 1861.98967011891],
    [0.00000000133, 5.86296749734, 2472.43494513869],
    [0.00000000138, 1.97592968874, 34554.57004618409],
    [0.00000000139, 3.62111712693, 3.8342461353],
    [0.0000000013, 2.7843820457, 529.91752892591],
    [0.00000000157, 0.66637254756, 10787.3865270623],
    [0.00000000133, 4.50452650479, 6624.5702959475],
    [0.00000000148, 2.40612364993, 7051.1684868235],
    [0.0000000013, 3.08824912384, 7594.0389145487],
    [0.00000000132, 0.1726378543, 9594.99527173989],
    [0.00000000138, 5.62209899863, 12406.4043683121],
    [0.0000000013, 4.81515367719, 529.95203623031],
    [0.00000000143, 3.29046013826, 10015.0348608849],
    [0.00000000149, 0.26971082215, 10.88048283331],
    [0.00000000178, 4.65997179417, 2675.61256408629],
    [0.00000000133, 4.74586376419, 29424.39041543249],
    [0.00000000158, 3.17185301711, 6092.4038438749],
    [0.00000000131, 5.18408640439, 158.6997002997],
    [0.00000000134, 4.61138320293, 2954.4365936111],
    [0.00000000142, 1.22013927552, 3041.2422149471],
    [0.00000000164, 1.02457529047, 26083.7779887327],
    [0.00000000145, 3.33534254136, 8373.6343403855],
    [0.00000000172, 1.36305306778, 1086.53966880249],
    [0.00000000128, 1.88046940017, 155.10927164789],
    [0.00000000137, 4.29526096322, 6137.5506117869],
    [0.00000000167, 3.86261571309, 107.9073414221],
    [0.00000000133, 1.80894644197, 12167.75887909109],
    [0.00000000137, 3.89101568839, 14581.0189722551],
    [0.00000000137, 1.10646412832, 20995.1491489659],
    [0.00000000126, 6.13522128177, 37.88921815429],
    [0.0000000013, 0.80699742659, 4108.7050635319],
    [0.00000000137, 5.57568822106, 18052.68572567429],
    [0.00000000131, 2.10282374334, 692.4014187103],
    [0.00000000132, 5.61172315472, 27490.44866056129],
    [0.00000000144, 5.56368880495, 1802.6158082053],
    [0.00000000146, 5.31840685158, 3475.43368925169],
    [0.00000000126, 0.28303045782, 18447.7319353977],
    [0.00000000141, 6.27643241405, 3716.6219757535],
    [0.00000000124, 1.38024620663, 31172.40682849949],
    [0.00000000124, 1.96413242139, 6688.15233475721],
    [0.00000000121, 1.40075751759, 3590.7607049255],
    [0.00000000121, 4.72300940105, 3090.95178344111],
    [0.00000000122, 5.79446111948, 2257.59587624631],
    [0.00000000123, 2.86133242277, 6710.8981794191],
    [0.00000000129, 3.19990002398, 3073.76156749449],
    [0.00000000131, 5.96540599255, 5401.6740982551],
    [0.00000000166, 3.56556372747, 6553.44982754571],
    [0.00000000134, 1.17245951228, 4783.1174529435],
    [0.00000000122, 4.84545055419, 1235.8318428395],
    [0.00000000128, 0.74562744196, 3081.2954391595],
    [0.00000000128, 5.37813947668, 3600.41704920711],
    [0.00000000121, 0.16505703713, 2126.05391455991],
    [0.00000000124, 3.09719471943, 5820.6711071633],
    [0.00000000122, 1.01207063042, 3343.9590378681],
    [0.0000000014, 2.18255999829, 10191.17364574889],
    [0.00000000127, 2.49175261711, 3759.3605669903],
    [0.00000000143, 5.81200960148, 2229.2139990813],
    [0.0000000012, 3.37800348541, 1648.69057468091],
    [0.00000000152, 5.74350080821, 3340.8217368789],
    [0.00000000152, 3.52185876402, 3340.8907514877],
    [0.00000000137, 5.24958747332, 4296.0977687829],
    [0.0000000014, 6.07934598932, 2233.71743849851],
    [0.00000000118, 2.67440875498, 7534.6650526351],
    [0.00000000137, 3.22103647277, 14588.0652089531],
    [0.00000000123, 1.0533874646, 9381.2034902007],
    [0.00000000116, 5.02262371793, 10338.4729672395],
    [0.00000000137, 0.87583504561, 8322.8018810797],
    [0.00000000126, 4.15152723756, 4083.84630471591],
    [0.00000000133, 0.20050131976, 3923.8551555617],
    [0.00000000124, 2.32394389472, 9124.67816855889],
    [0.00000000115, 2.71796809879, 6740.3548978297],
    [0.00000000126, 4.47944403901, 3509.9487923493],
    [0.00000000121, 4.78087706215, 3862.94602731009],
    [0.00000000118, 0.67101126938, 1052.02456570489],
    [0.00000000134, 5.30662276999, 6659.6178415567],
    [0.00000000133, 0.28852620914, 28.2053699843],
    [0.00000000113, 5.12126627476, 8436.5313206481],
    [0.00000000133, 0.75275688425, 6147.8455525254],
    [0.00000000113, 3.24121652591, 3116.5114484814],
    [0.00000000154, 1.23584313686, 401.4283042737],
    [0.00000000119, 0.88326438143, 1471.9968445471],
    [0.00000000116, 1.51219722423, 3727.2758947555],
    [0.0000000012, 3.47272455509, 3826.3406620059],
    [0.00000000111, 3.49092955754, 6837.8693913855],
    [0.00000000147, 4.35013931667, 8447.2352963007],
    [0.0000000012, 4.26889661746, 2185.00745180929],
    [0.00000000114, 5.78187265627, 3966.4813803805],
    [0.00000000126, 1.01640087918, 7586.92536754791],
    [0.00000000129, 3.0280011763, 3580.06172980831],
    [0.00000000129, 3.09576574234, 3101.6507585583],
    [0.00000000123, 3.17573128745, 5511.3927845075],
    [0.00000000133, 2.29548900012, 6738.36704581871],
    [0.00000000124, 5.40608799173, 7210.6720010107],
    [0.00000000107, 3.75293495504, 6681.04834621889],
    [0.00000000139, 4.05414767826, 14867.49369840869],
    [0.00000000112, 2.28073796145, 27433.64539839149],
    [0.00000000112, 5.01410887723, 10176.94655174729],
    [0.00000000126, 2.05837136952, 6314.2443419207],
    [0.00000000146, 1.72637612424, 3282.9775481795],
    [0.00000000146, 4.3973907944, 3398.73494018711],
    [0.00000000112, 4.54751217161, 4953.8075772149],
    [0.00000000115, 2.98486230767, 4179.8255319337],
    [0.00000000115, 3.13902228769, 2501.88695643291],
    [0.0000000013, 3.94422427867, 6155.7098590516],
    [0.00000000134, 5.72416579818, 4825.78873387751],
    [0.00000000138, 5.27722150274, 5813.5350068055],
    [0.00000000115, 2.98002244807, 8976.92626139531],
    [0.00000000147, 5.2625385572, 5223.4501023187],
    [0.00000000105, 3.84211418761, 17822.0617430853],
    [0.00000000118, 5.89203827165, 5483.01090734249],
    [0.00000000103, 5.03671194765, 1059.55843736991],
    [0.00000000104, 4.83299836609, 549.80246700989],
    [0.00000000107, 2.17758765251, 7076.0945559423],
    [0.00000000105, 3.92288350713, 6961.2551752355],
    [0.00000000129, 3.92939028141, 2961.48283030911],
    [0.00000000129, 2.19437663723, 3720.2296580575],
    [0.00000000102, 0.2678677767, 3230.16228799689],
    [0.00000000122, 1.12211172947, 27676.8616373325],
    [0.00000000136, 5.86697607222, 765.54924696289],
    [0.00000000116, 1.89113439545, 10213.0417287275],
    [0.00000000115, 4.67049842349, 2631.86644190671],
    [0.00000000102, 5.07453595268, 639.6534688305],
    [0.00000000104, 4.68887219232, 31450.0708602353],
    [0.00000000141, 0.65765353971, 6456.63624021419],
    [0.00000000138, 6.27290155228, 12295.71041212569],
    [0.00000000127, 4.38757311711, 2655.74487965451],
    [0.00000000101, 3.19202487469, 21791.9347907493],
    [0.00000000103, 1.18713398647, 3134.1830607791],
    [0.000000001, 1.62440020436, 31213.95761948429],
    [0.00000000115, 4.2941316622, 21000.67207327329],
    [0.00000000138, 2.88368956632, 3201.1581046605],
    [0.00000000138, 3.24007735232, 3480.5543837061],
    [0.00000000099, 3.72853240669, 6953.6539932677],
    [0.00000000129, 1.79825340837, 4878.60904519429],
    [0.00000000106, 3.75036852906, 3023.9767395597],
    [0.000000001, 3.34238462758, 8741.79888998789],
    [0.000000001, 0.20079197399, 8742.28652495491],
    [0.00000000101, 1.72955787995, 6534.6569843595],
    [0.000000001, 0.79632336674, 2652.2217613055],
    [0.00000000108, 4.13052988823, 250.1482782257],
    [0.00000000113, 3.89774709782, 13937.0383226175],
    [0.000000001, 3.82154216379, 3340.77168022831],
    [0.000000001, 5.44381740844, 3340.9408081383],
    [0.00000000098, 1.40156960306, 6144.1765238207],
    [0.00000000104, 3.63716602244, 11526.88127170889],
    [0.00000000099, 5.78288558119, 5312.80841803811],
    [0.00000000113, 2.18817668288, 10080.9673245295],
    [0.00000000107, 4.16143134189, 6680.9137256133],
    [0.00000000095, 0.21807223502, 8425.40702033129],
    [0.00000000095, 2.99902409772, 3310.9742005731],
    [0.00000000095, 3.12474282092, 3370.7382877935],
    [0.00000000098, 6.07573481401, 18616.82448356369],
    [0.00000000095, 5.51010177831, 4783.1347065957],
    [0.00000000096, 0.99819535387, 1353.1467105243],
    [0.000000001, 3.41304577695, 3340.9063008339],
    [0.000000001, 5.85231379528, 3340.80618753271],
    [0.00000000112, 1.01874315131, 5084.86190393429],
    [0.00000000098, 3.70334941527, 7277.64704489211],
    [0.00000000097, 1.4536540867, 12509.00950756369],
    [0.000000001, 0.65818374358, 1755.2278671956],
    [0.00000000098, 0.97983442462, 1784.2880972279],
    [0.00000000129, 2.93691181926, 4591.6864404841],
    [0.00000000098, 5.93410154372, 4981.70181941289],
    [0.000000001, 5.59483630292, 6474.7679335865],
    [0.00000000125, 1.84348906532, 30228.2222939139],
    [0.00000000102, 3.13400085165, 2214.98690507971],
    [0.00000000092, 1.7124393127, 1383.13116433011],
    [0.00000000101, 5.97238974906, 3302.2355735785],
    [0.000000001, 4.21928425466, 13517.55897844709],
    [0.00000000096, 3.71471309882, 16975.9789083341],
    [0.00000000096, 3.08041062563, 34114.8702517911],
    [0.00000000118, 5.3917456356, 3343.8251895999],
    [0.00000000118, 0.73202128304, 3337.88729876671],
    [0.00000000105, 3.93919081745, 42389.1787537905],
    [0.00000000118, 5.04536066143, 2524.20291796811],
    [0.00000000114, 3.42685633162, 947.95147041809],
    [0.00000000102, 3.49277811118, 27946.9917974033],
    [0.00000000103, 2.642596998, 20235.36664379391],
    [0.00000000094, 0.20789444079, 11507.0135872771],
    [0.00000000118, 2.04691913094, 3284.47305810711],
    [0.00000000118, 4.0768477877, 3397.2394302595],
    [0.00000000115, 3.05378875629, 640.6337898987],
    [0.00000000104, 4.79113313233, 3149.4252317239],
    [0.00000000104, 4.47417659438, 3532.2872566427],
    [0.00000000091, 1.86422625651, 24093.03297169169],
    [0.00000000093, 0.68624597132, 987.9900904115],
    [0.00000000093, 4.76939880894, 1957.4812623697],
    [0.00000000116, 3.49150933105, 49225.8240066243],
    [0.00000000099, 3.02556702345, 6489.53276980449],
    [0.00000000113, 1.69589601449, 2597.86618365071],
    [0.00000000107, 5.76130975592, 1744.66980189871],
    [0.00000000094, 3.77994404993, 3334.72301825071],
    [0.00000000094, 2.34382286871, 3346.9894701159],
    [0.0000000009, 5.67852689848, 15747.0167950119],
    [0.00000000091, 1.1452318956, 50818.4200202571],
    [0.00000000108, 3.58607681238, 1971.70835637129],
    [0.00000000111, 2.45297309782, 27417.3008323087],
    [0.00000000104, 3.5679672929, 441.06910236111],
    [0.00000000089, 5.47858220889, 3313.38737778371],
    [0.00000000089, 0.64518470975, 3368.3251105829],
    [0.00000000103, 4.62821556081, 1059.6930579755],
    [0.00000000112, 2.79231795944, 1744.73711220151],
    [0.00000000092, 0.19138124327, 32509.4527904245],
    [0.000000001, 3.8576836109, 10611.14592459111],
    [0.00000000112, 4.47970305153, 10721.3522458105],
    [0.000000001, 5.72799005083, 309.0345051723],
    [0.00000000105, 3.08589856125, 24606.3793707035],
    [0.00000000095, 0.84457868347, 529.86747227531],
    [0.0000000012, 6.10556233132, 3202.33874731261],
    [0.0000000012, 0.01820458732, 3479.373741054],
    [0.00000000086, 0.77245183733, 2918.82880302731],
    [0.00000000086, 5.35131508131, 3762.8836853393],
    [0.00000000099, 2.05522586895, 3458.6690470753],
    [0.00000000099, 4.06854104969, 3223.0434412913],
    [0.00000000089, 1.74507054165, 22531.3344226301],
    [0.00000000107, 3.69153019661, 3311.87461420391],
    [0.00000000107, 2.43223672203, 3369.83787416271],
    [0.0000000009, 3.38165668766, 4670.36833444331],
    [0.00000000094, 1.95446777954, 796.5245706477],
    [0.00000000085, 5.95959971466, 809.2336519635],
    [0.00000000084, 3.00350230053, 4778.03185838191],
    [0.00000000118, 1.79240399777, 8219.22147189409],
    [0.00000000104, 2.76036150084, 3149.3907244195],
    [0.00000000104, 0.22176291869, 3532.3217639471],
    [0.00000000084, 4.2262760617, 1125.62552162009],
    [0.00000000085, 5.95594200813, 4555.6585738067],
    [0.00000000116, 5.49142363859, 14694.7484118235],
    [0.00000000086, 6.08864556833, 12410.9751180321],
    [0.00000000084, 3.77352177481, 1106.89498820129],
    [0.00000000117, 2.69247322881, 30774.2578250913],
    [0.0000000009, 0.13296522638, 32366.8538387241],
    [0.00000000091, 5.29506341401, 9161.7711688301],
    [0.00000000089, 6.23353856478, 3348.53003615871],
    [0.00000000089, 6.17341366104, 3333.1824522079],
    [0.00000000093, 5.47331396961, 9225.29545579949],
    [0.00000000102, 3.1667662317, 4466.72558328691],
    [0.00000000102, 3.1667662317, 4466.2379483199],
    [0.00000000099, 0.51130040313, 4879.0966801613],
    [0.00000000086, 4.05866338465, 3613.0415665679],
    [0.00000000083, 4.34759815373, 7899.30648388849],
    [0.00000000082, 1.30967650485, 1265.32366114289],
    [0.00000000084, 0.92794835827, 2942.7745510779],
    [0.00000000083, 3.70816234293, 3077.28468584349],
    [0.00000000082, 0.64666599764, 3351.42559923031],
    [0.00000000082, 5.477100921, 3330.2868891363],
    [0.00000000112, 1.67471534984, 14900.9339602607],
    [0.00000000082, 0.58404375695, 22318.03532719209],
    [0.00000000084, 3.20837869526, 3597.8742519263],
    [0.00000000084, 2.91538822338, 3083.8382364403],
    [0.00000000082, 2.92113670927, 1552.2237124961],
    [0.00000000095, 0.43608229663, 530.0020928809],
    [0.00000000081, 4.30100281575, 2980.2578272547],
    [0.00000000085, 4.86849510055, 1056.1026293237],
    [0.00000000097, 0.04175992157, 4447.9950498681],
    [0.00000000084, 4.53785743204, 845.8390172677],
    [0.00000000114, 1.28659258054, 3063.8212504419],
    [0.00000000114, 4.8371743381, 3617.89123792471],
    [0.00000000085, 2.86532283276, 23937.6125722575],
    [0.00000000085, 2.68159304983, 54790.1805074615],
    [0.00000000086, 3.41567897446, 23010.1929284189],
    [0.00000000085, 2.68041688991, 8322.3142461127],
    [0.00000000083, 2.23302149732, 20103.2922395959],
    [0.00000000112, 3.74830398933, 5295.5733945469],
    [0.00000000081, 0.67408003259, 3490.7537193101],
    [0.00000000081, 5.44968688605, 3190.9587690565],
    [0.00000000099, 2.78587638666, 4845.6564183093],
    [0.00000000094, 3.98523941104, 796.5590779521],
    [0.00000000092, 0.38071563992, 4452.4984892853],
    [0.00000000092, 0.38071563992, 4452.0108543183],
    [0.00000000091, 4.85895142608, 2544.54098371471],
    [0.00000000081, 1.64836757283, 7166.9530887057],
    [0.00000000089, 4.15046971529, 6311.7688549427],
    [0.00000000084, 5.20424780335, 4822.2656155285],
    [0.00000000089, 1.45260507956, 4049.8460464599],
    [0.00000000085, 4.83658145136, 14716.0840522905],
    [0.00000000081, 2.70661000816, 34363.12178007249],
    [0.00000000094, 0.87814163025, 24532.73276608469],
    [0.00000000102, 1.6186393779, 3524.7258310853],
    [0.00000000102, 4.50512754074, 3156.9866572813],
    [0.00000000084, 1.33644474511, 2942.63993047231],
    [0.00000000084, 2.73245346971, 4801.9102961297],
    [0.00000000084, 2.63232238753, 78263.95324220609],
    [0.00000000079, 0.32930597136, 4424.1166121203],
    [0.00000000081, 1.78230535496, 3333.72544353031],
    [0.00000000081, 4.34146156368, 3347.98704483631],
    [0.00000000079, 5.3256405825, 4029.49072706111],
    [0.00000000083, 0.29135686673, 24336.2492106327],
    [0.00000000102, 2.08124303406, 3119.9559667775],
    [0.00000000096, 6.1659721211, 3324.02404313351],
    [0.00000000096, 6.24098010472, 3357.6884452331],
    [0.0000000008, 4.26306642509, 12987.86801335249],
    [0.00000000099, 4.02513713414, 3376.4640347671],
    [0.00000000099, 2.0986297845, 3305.24845359951],
    [0.0000000009, 4.06976669148, 18028.2472915225],
    [0.00000000086, 2.51147086235, 3296.20241094311],
    [0.00000000086, 3.61229605629, 3385.5100774235],
    [0.00000000085, 5.04929372084, 3487.65067705471],
    [0.00000000085, 1.0744731978, 3194.0618113119],
    [0.00000000085, 4.07158225922, 1758.8968959003],
    [0.00000000088, 0.27523861221, 2751.2589746635],
    [0.00000000082, 3.74673586971, 16460.5773470085],
    [0.00000000101, 1.69645528757, 1162.23088692429],
    [0.00000000079, 3.11818153513, 8186.2688450091],
    [0.00000000097, 1.73619334013, 4025.9676087121],
    [0.00000000077, 0.22099888781, 7446.7741003625],
    [0.00000000077, 0.22099888781, 7447.2617353295],
    [0.00000000077, 0.70593259841, 430.7741616226],
    [0.00000000102, 5.59681662693, 574.5886158183],
    [0.00000000079, 3.73816629713, 1593.2488660304],
    [0.0000000009, 1.49099440681, 12891.88878613469],
    [0.00000000079, 6.19859779271, 101010.75632211348],
    [0.000000001, 2.65214559872, 1481.1655538617],
    [0.00000000106, 4.78557880821, 13.9832765181],
    [0.00000000076, 5.49053372377, 31979.7618253299],
    [0.00000000102, 5.35655741954, 52168.2874299159],
    [0.00000000103, 3.41208170979, 6777.44789810091],
    [0.0000000008, 3.38185008186, 1954.9609678471],
    [0.00000000075, 0.45216449067, 14797.8411860421],
    [0.00000000091, 5.73775200546, 6836.3341250475],
    [0.00000000077, 0.48111203734, 51770.1384265077],
    [0.00000000078, 4.39552972351, 8831.1572057073],
    [0.00000000085, 2.57284263819, 369.4559984569],
    [0.00000000091, 0.6065377504, 2544.5754910191],
    [0.00000000081, 0.95322040984, 3277.1203458799],
    [0.00000000081, 5.1705465088, 3404.59214248671],
    [0.00000000076, 3.8544580615, 10025.11658096489],
    [0.00000000084, 5.75160998999, 45331.6421770821],
    [0.00000000077, 0.59680440034, 1324.6975230565],
    [0.00000000091, 5.97834946002, 45494.33761226529],
    [0.00000000081, 5.17266571119, 3325.11613803129],
    [0.0000000008, 1.7966549201, 569.0656915109],
    [0.00000000075, 5.25222075961, 9090.7180107311],
    [0.0000000009, 3.17222371452, 1747.3635606694],
    [0.00000000073, 4.2269581903, 7476.2314113615],
    [0.00000000091, 4.81327110244, 8536.10097651771],
    [0.00000000091, 4.81327110244, 8535.6133415507],
    [0.00000000102, 4.59807270679, 8692.08137235589],
    [0.00000000073, 5.20991824086, 16062.4283436003],
    [0.00000000087, 4.2613660465, 15117.75617404771],
    [0.00000000077, 1.47494250575, 20618.2631760171],
    [0.00000000086, 3.28001892853, 5355.4796989721],
    [0.00000000081, 0.96338461381, 2917.2935366893],
    [0.00000000077, 0.91362006762, 1008.30565339989],
    [0.00000000081, 1.65889494544, 2910.2472999913],
    [0.00000000072, 4.24572819275, 928.08378598631],
    [0.00000000073, 3.00898976422, 6809.4875142205],
    [0.00000000075, 6.23302655949, 4106.1616736627],
    [0.00000000074, 4.08117422586, 30376.10882168309],
    [0.00000000094, 5.88680065989, 17809.95712170029],
    [0.0000000008, 2.13848140967, 6151.8450160913],
    [0.00000000075, 0.0909237739, 81604.56566890588],
    [0.00000000076, 0.0112967496, 44534.85653529869],
    [0.00000000097, 5.85293706952, 5749.61794906429],
    [0.00000000071, 3.99491883467, 9384.59719059169],
    [0.00000000074, 4.00818928999, 6603.7181268992],
    [0.00000000071, 3.77471202293, 14061.9646725103],
    [0.00000000073, 3.77824643335, 13635.3664816343],
    [0.00000000071, 4.21888578691, 5622.1540509967],
    [0.00000000071, 4.30845955918, 23539.8838935135],
    [0.00000000081, 1.38235650244, 19573.6012745013],
    [0.000000001, 3.67335445653, 3399.7424711299],
    [0.00000000075, 3.40358526619, 1214.55851213989],
    [0.00000000094, 3.33044734976, 10816.84383806129],
    [0.00000000071, 4.38626132317, 12140.8449579613],
    [0.00000000072, 1.37425478851, 26887.6098672141],
    [0.00000000072, 0.56330972127, 2010.8565189563],
    [0.00000000072, 1.19011347351, 11560.32153356091],
    [0.00000000072, 5.48851072898, 21957.4369102635],
    [0.00000000071, 4.4187477996, 1619.7537522461],
    [0.00000000074, 1.68474352553, 20205.89737884749],
    [0.00000000075, 2.7032571168, 7477.27904273249],
    [0.00000000073, 0.64702279583, 6493.54352312051],
    [0.00000000069, 3.54263618042, 5784.06574185909],
    [0.00000000084, 1.01645431208, 2118.5200428949],
    [0.00000000086, 3.03743422532, 19404.0210913683],
    [0.00000000095, 2.31320113804, 2104.7805838603],
    [0.00000000075, 2.77500192554, 8748.9124369887],
    [0.00000000076, 4.3335580841, 3268.8005108285],
    [0.00000000076, 1.79020883454, 3412.9119775381],
    [0.00000000089, 1.64126071038, 15643.43638582629],
    [0.00000000075, 1.2594790956, 36106.1029037991],
    [0.00000000069, 2.65446892553, 21272.8804910045],
    [0.00000000071, 0.24705889025, 58857.2749540315],
    [0.00000000071, 4.66819102175, 5298.0936890695],
    [0.00000000071, 4.66819102175, 5298.5813240365],
    [0.0000000008, 2.54697779651, 6151.71039548571],
    [0.00000000068, 3.06859270324, 942.3058794525],
    [0.00000000089, 3.32880979752, 30640.1004561165],
    [0.00000000068, 4.30719958123, 11247.4527822533],
    [0.00000000068, 5.5392342883, 8550.32807051931],
    [0.00000000078, 3.75474105015, 422.9098550964],
    [0.00000000068, 4.94904122324, 4665.3099497563],
    [0.00000000068, 4.94904122324, 4665.7975847233],
    [0.0000000007, 5.89813960443, 2332.3067732999],
    [0.0000000007, 0.02785351787, 13105.18788157269],
    [0.00000000071, 5.54255167971, 3309.86425943471],
    [0.00000000071, 0.58121523893, 3371.8482289319],
    [0.0000000008, 3.39865381902, 9705.6892279263],
    [0.00000000079, 4.40031750333, 16065.82204399129],
    [0.0000000007, 0.92757117435, 7843.94337529091],
    [0.00000000068, 3.54162039995, 9175.9982628317],
    [0.00000000081, 2.34135520581, 94329.53146871387],
    [0.00000000067, 4.0050181792, 6112.6467968557],
    [0.00000000075, 0.0897236773, 1585.38455950421],
    [0.00000000091, 1.20169391057, 7768.2521571691],
    [0.00000000068, 5.88468412911, 11663.4143077795],
    [0.00000000069, 1.03197307646, 23554.1109875151],
    [0.00000000072, 5.59069878383, 3267.2207809637],
    [0.00000000072, 0.53306813481, 3414.4917074029],
    [0.00000000073, 2.34799922671, 2693.84541086851],
    [0.00000000069, 5.96168258099, 3494.7814777077],
    [0.00000000069, 0.16208433765, 3186.93101065891],
    [0.00000000068, 2.22578139544, 5202.1144618517],
    [0.00000000085, 1.07840622469, 4157.5095703985],
    [0.00000000066, 0.7096747459, 15636.32283882549],
    [0.00000000093, 5.17707127671, 1826.07731249979],
    [0.00000000075, 0.69441189563, 15276.21205686389],
    [0.00000000067, 4.16813989827, 290.24166198609],
    [0.00000000073, 3.8794198698, 3237.2758349977],
    [0.00000000066, 4.38025942738, 10823.95738506209],
    [0.00000000066, 4.38025942738, 10824.44502002911],
    [0.00000000066, 2.3080101801, 16056.29511766771],
    [0.00000000066, 1.79189006879, 226.07308589371],
    [0.00000000068, 5.14003771959, 4897.4243911387],
    [0.00000000065, 2.25884185483, 3324.09135343631],
    [0.00000000065, 3.86492506381, 3357.6211349303],
    [0.00000000066, 3.63859878484, 176.44991265029],
    [0.00000000069, 2.88792708089, 1442.03464492889],
    [0.00000000065, 3.80463962799, 12725.20961729149],
    [0.00000000071, 2.38407372949, 11250.55557593809],
    [0.00000000066, 5.64622594457, 415.7963080956],
    [0.00000000066, 2.06957972906, 3738.93793728871],
    [0.0000000009, 0.09722302162, 2885.946877656],
    [0.0000000009, 6.02654389702, 3795.7656107106],
    [0.00000000067, 3.85822640732, 13359.10309563091],
    [0.00000000069, 6.01059659703, 4932.9646228491],
    [0.00000000067, 3.14807353187, 20043.43074271529],
    [0.00000000067, 2.27076085895, 19247.6203708659],
    [0.00000000064, 5.7782013538, 8983.0544867925],
    [0.00000000081, 4.01879254835, 5136.1146879043],
    [0.00000000076, 4.53170041047, 6677.53651762],
    [0.00000000064, 5.044654537, 6564.1488026629],
    [0.00000000063, 3.67470240475, 10294.2664199675],
    [0.00000000063, 3.67470240475, 10294.7540549345],
    [0.00000000065, 0.85570190902, 0.7365035847],
    [0.00000000067, 5.44254364972, 4396.71505602351],
    [0.0000000007, 2.61333516815, 5088.46362233621],
    [0.0000000007, 2.61333516815, 5087.97598736919],
    [0.00000000066, 1.94886102839, 3332.68810760091],
    [0.00000000066, 4.17490589025, 3349.02438076571],
    [0.00000000069, 2.29302584578, 24076.6884056089],
    [0.00000000063, 2.6521743448, 15004.0267344793],
    [0.00000000066, 3.29840260562, 3303.8606535723],
    [0.00000000066, 2.82536431302, 3377.85183479431],
    [0.00000000062, 5.68281304505, 423.3188900105],
    [0.00000000073, 6.20384290738, 7250.29054491051],
    [0.00000000066, 4.0577738835, 1083.01655045349],
    [0.00000000066, 1.66108334221, 3739.0725578943],
    [0.00000000065, 2.38868691844, 3454.58568375171],
    [0.00000000065, 3.7350800002, 3227.1268046149],
    [0.00000000069, 1.02568627494, 5885.1879177189],
    [0.00000000069, 4.18150566046, 2384.56708821271],
    [0.00000000082, 2.24915344259, 6573.8051469445],
    [0.00000000078, 3.71449046077, 12979.79699205951],
    [0.00000000063, 0.30909856819, 6298.0845036929],
    [0.00000000063, 5.86138984897, 379.12959639069],
    [0.00000000078, 4.781584037, 17079.0716825527],
    [0.00000000063, 0.84589576108, 4295.6101338159],
    [0.00000000072, 1.20473950633, 7366.5127251091],
    [0.00000000064, 5.94145157304, 21258.6533970029],
    [0.00000000061, 4.2519954276, 3870.52995562571],
    [0.00000000069, 0.74102855275, 6757.7347421587],
    [0.00000000061, 6.28276705909, 3870.5644629301],
    [0.00000000061, 3.89740578515, 8528.49979454989],
    [0.00000000072, 6.17734111246, 3337.95522989351],
    [0.00000000072, 6.22961111336, 3343.7572584731],
    [0.00000000081, 3.28865783131, 17498.5563264279],
    [0.0000000008, 5.66181879898, 68241.62832713968],
    [0.0000000007, 5.98008002738, 5096.3279288624],
    [0.0000000007, 5.98008002738, 5095.8402938954],
    [0.00000000062, 2.20286177266, 629.0954035336],
    [0.00000000061, 5.80236333905, 7056.74676748629],
    [0.00000000061, 3.69141943753, 27035.49639498329],
    [0.00000000075, 0.87745006748, 13531.78607244869],
    [0.00000000062, 2.97984792859, 14591.16800263789],
    [0.00000000062, 2.97984792859, 14591.6556376049],
    [0.00000000071, 4.62738217375, 5622.01943039111],
    [0.00000000066, 2.27365299388, 954.9977071161],
    [0.00000000068, 2.72448999946, 3930.4535137031],
    [0.00000000066, 3.14619736362, 2899.54332433869],
    [0.00000000061, 4.49549745154, 2711.51702316619],
    [0.00000000063, 4.32081273594, 2125.5662795929],
    [0.00000000073, 4.45773042596, 6695.6957648847],
    [0.00000000069, 5.27809995063, 5885.15341041451],
    [0.0000000006, 5.14170398436, 41427.24316569529],
    [0.0000000008, 3.75731973309, 4576.44426953929],
    [0.0000000008, 3.75731973309, 4576.9319045063],
    [0.00000000059, 2.49398932309, 9374.58262930109],
    [0.00000000074, 4.89168591212, 3583.0972131903],
    [0.00000000082, 5.81793237346, 2636.7354245989],
    [0.00000000058, 4.78357545202, 720.89541372269],
    [0.00000000058, 1.64198279843, 721.3830486897],
    [0.00000000059, 3.57410159337, 14319.44721987369],
    [0.00000000065, 1.28381558772, 48274.1056003737],
    [0.00000000058, 4.51103536629, 110.9428248041],
    [0.00000000072, 1.68586060618, 195.21520194411],
    [0.00000000059, 5.74510260782, 13738.4592558529],
    [0.00000000063, 1.06605769138, 9722.9547033137],
    [0.0000000008, 4.45970706755, 3304.2076812538],
    [0.0000000008, 1.66405985109, 3377.5048071128],
    [0.00000000058, 5.44450610447, 16070.5222116693],
    [0.0000000007, 2.49253748917, 11787.8477230005],
    [0.00000000062, 4.94992711761, 4558.6940571887],
    [0.00000000076, 1.99891799021, 1612.70751554809],
    [0.00000000071, 1.30058846825, 6486.4972864225],
    [0.00000000062, 5.09763426823, 437.8877086234],
    [0.00000000059, 4.90581628492, 37057.33367508269],
    [0.0000000007, 2.79389929588, 8116.1286976755],
    [0.00000000058, 6.0964012714, 1969.4444807273],
    [0.00000000058, 0.02736564724, 4712.26800763931],
    [0.00000000057, 4.37594257879, 4565.7402938867],
    [0.00000000065, 1.6624582593, 5526.1075134761],
    [0.00000000072, 0.18252327904, 8948.4720733921],
    [0.00000000059, 2.44348231635, 22854.8398392875],
    [0.00000000074, 2.0261657309, 3192.28988479],
    [0.00000000074, 1.02342311752, 3189.3209393734],
    [0.00000000074, 2.75351422654, 5106.1352346339],
    [0.0000000006, 2.41681225251, 3333.2775649737],
    [0.0000000006, 3.70695466613, 3348.4349233929],
    [0.00000000057, 3.99795106682, 1022.5327474015],
    [0.00000000062, 0.6041743177, 792.53107098389],
    [0.00000000055, 4.34931243096, 3355.5935265089],
    [0.00000000055, 1.77445448768, 3326.11896185771],
    [0.00000000057, 5.12925283675, 3973.1523485295],
    [0.00000000057, 1.32085031811, 15842.9960222297],
    [0.00000000071, 6.21599374391, 418.26050532349],
    [0.00000000061, 3.75995016598, 223.1041404771],
    [0.00000000063, 4.40371062565, 4137.1715046519],
    [0.00000000067, 5.0014618097, 11240.4065455553],
    [0.00000000055, 5.08628762479, 25665.7613008927],
    [0.00000000076, 4.50412584127, 33716.72124838289],
    [0.00000000061, 0.88820799738, 7630.64427985291],
    [0.00000000065, 5.53821276618, 14267.66258598049],
    [0.00000000065, 5.53821276618, 14268.1502209475],
    [0.0000000006, 5.95972666137, 1368.4164353615],
    [0.00000000061, 3.06892273504, 1118.9996095863],
    [0.00000000067, 4.29317097897, 13366.2839529345],
];

const Y1: &[Term] = &[
    [0.01668487239, 2.59897259786, 0.2438174835],
    [0.00551520815, 3.5228518577, 6681.46867088311],
    [0.00077122404, 3.86148242536, 10022.0810975829],
    [0.00033905789, 0.99877346654, 3340.36860921629],
    [0.00013417687, 1.14386060325, 3340.8562441833],
    [0.00009584524, 4.1997756459, 13362.6935242827],
    [0.00002619567, 1.47212497791, 3337.33312583431],
    [0.00002615345, 4.65188218049, 3344.3793625323],
    [0.00001454057, 1.29298490269, 6680.98103591609],
    [0.00001163163, 4.53798497815, 16703.3059509825],
    [0.00000900588, 1.74364630959, 1059.6257476727],
    [0.00000429589, 1.18548595402, 2942.7072407751],
    [0.00000388556, 4.38001744017, 5622.08674069391],
    [0.00000380679, 4.9330510935, 3739.0052475915],
    [0.00000394611, 4.91194179182, 6684.9917892321],
    [0.00000336947, 3.64146347925, 3149.4079780717],
    [0.00000333888, 0.88735593348, 3185.43584474911],
    [0.00000318443, 2.48094295107, 3532.3045102949],
    [0.00000317603, 5.2373810692, 3496.2766436175],
    [0.00000312062, 2.66000176108, 2544.5582373669],
    [0.00000285965, 3.02967127901, 796.5418242999],
    [0.00000259967, 3.45408083721, 4137.1542509997],
    [0.00000205452, 1.6309240195, 1194.6908277081],
    [0.00000140526, 4.87623075662, 20043.9183776823],
    [0.0000015918, 2.00572713492, 1589.3167127673],
    [0.00000133487, 3.06919175173, 5885.1706640667],
    [0.00000132246, 2.12952118645, 4400.2381743725],
    [0.0000012694, 1.24935817727, 6677.9455525341],
    [0.00000102941, 4.48642964758, 5487.0216606585],
    [0.00000128977, 0.22856181225, 1592.8398311163],
    [0.00000101403, 3.97057397888, 3339.8759231151],
    [0.00000101343, 2.15319078531, 3341.83656525151],
    [0.000000896, 4.30886056351, 3870.54720927791],
    [0.00000084159, 5.10763376124, 1990.9888345245],
    [0.00000093032, 1.57904935535, 10021.5934626159],
    [0.00000079379, 2.34223792198, 426.8420083595],
    [0.00000077187, 5.3537463518, 7079.61767429131],
    [0.00000081451, 4.0947229934, 5092.3957755993],
    [0.00000091218, 4.06344861425, 2146.4092339587],
    [0.00000063951, 3.70258807947, 2389.1378379327],
    [0.00000057311, 5.21513953164, 10025.6042159319],
    [0.00000056935, 0.36046078739, 3098.1276402093],
    [0.00000075514, 2.03966755509, 4535.3032544079],
    [0.00000055567, 5.9307875362, 9492.3901324883],
    [0.00000072076, 5.89419507935, 5088.8726572503],
    [0.00000052967, 5.76121074267, 3583.5848481573],
    [0.00000053267, 1.01723184039, 4690.7236538421],
    [0.00000070583, 2.29587751894, 2787.2868413409],
    [0.00000057299, 5.04645839215, 7.3573644843],
    [0.00000054075, 1.17994565418, 2957.9597119601],
    [0.00000050146, 6.18940453496, 191.2044486281],
    [0.00000046293, 2.42348353431, 4292.5746504339],
    [0.00000049234, 0.93659790719, 6681.45141723091],
    [0.00000058634, 3.83006998491, 3894.4256470257],
    [0.00000048264, 4.94385443663, 3723.7527764065],
    [0.00000049234, 2.96736953876, 6681.4859245353],
    [0.00000055021, 2.68195179354, 155.17658195069],
    [0.00000047402, 4.07145408153, 6490.0204047715],
    [0.00000039275, 3.34522669334, 1747.7725955835],
    [0.00000037297, 4.7809983232, 3554.1553396213],
    [0.00000036066, 1.31662704298, 3127.5571487453],
    [0.00000035298, 1.23303085666, 6526.04827144891],
    [0.00000033577, 1.93752924591, 2145.92159899169],
    [0.00000032981, 3.50261324943, 3333.7426971825],
    [0.00000030372, 5.46912135938, 1748.2602305505],
    [0.00000039114, 3.80687421474, 7477.7666776995],
    [0.0000002943, 3.77418319168, 6254.8704800071],
    [0.00000029559, 6.15473365534, 951.4745887671],
    [0.00000028511, 1.27708409847, 553.32558535889],
    [0.00000027567, 2.1778025211, 12303.3115940935],
    [0.00000027467, 0.62128414719, 4933.4522578161],
    [0.0000002813, 2.67378903203, 3347.96979118411],
    [0.00000034806, 4.74990712506, 1349.62359217529],
    [0.00000024557, 1.59353030822, 2811.1652790887],
    [0.00000024445, 4.65651492351, 1066.7392946735],
    [0.0000002923, 1.08762035239, 640.1411037975],
    [0.00000021272, 2.27427092663, 4929.92913946711],
    [0.00000024027, 2.31810288444, 382.6527147397],
    [0.00000024805, 2.29421805969, 2119.00767786191],
    [0.00000019016, 5.33725266506, 242.97242145751],
    [0.00000018321, 5.32154407296, 9623.9320941747],
    [0.00000017069, 0.73723843575, 3320.50092478451],
    [0.00000016952, 5.38620600325, 3361.2115635821],
    [0.00000016989, 5.21436339395, 23384.5308043821],
    [0.00000016214, 5.29782106321, 6681.40136058031],
    [0.00000016696, 3.94416253958, 2281.4743139941],
    [0.00000016004, 5.16305438762, 1052.51220067191],
    [0.00000017047, 1.13159672552, 6674.3551238823],
    [0.0000001459, 0.35043364178, 10018.5579792339],
    [0.00000016713, 5.38131437608, 7211.1596359777],
    [0.00000017707, 2.46690015193, 7740.8506010723],
    [0.00000016047, 2.67804298545, 3325.6037729983],
    [0.00000015961, 3.44566203623, 3356.10871536831],
    [0.00000016214, 4.88932467996, 6681.5359811859],
    [0.0000001378, 6.26179574629, 12833.00255918811],
    [0.0000001463, 2.07693903473, 2273.8731320263],
    [0.00000012478, 2.52316698362, 6682.44899195131],
    [0.00000012677, 5.48459046233, 5331.6012612243],
    [0.00000013489, 1.61171597857, 2288.1002260279],
    [0.00000015563, 3.79290468512, 4562.70481050471],
    [0.00000013052, 2.92086754961, 3767.4544350593],
    [0.00000011294, 0.59272382037, 1350.1112271423],
    [0.00000011234, 0.74117477922, 6438.7400669091],
    [0.00000012654, 0.84471005653, 529.44714761109],
    [0.00000012118, 0.3527396883, 537.0483295789],
    [0.00000011323, 0.8873810673, 522.8212355773],
    [0.000000103, 2.38634995278, 7875.91568110771],
    [0.0000001051, 1.46312475386, 5614.9731936931],
    [0.00000012502, 5.71659694947, 10420.23010099111],
    [0.00000010338, 3.30466885363, 10022.0983512351],
    [0.00000008834, 6.25318290526, 3205.7911641479],
    [0.00000009393, 5.31958384512, 6836.8890703173],
    [0.00000011331, 5.03073170237, 6041.5713845691],
    [0.00000008381, 6.15334573581, 3475.92132421871],
    [0.00000009243, 5.01043204259, 529.9347825781],
    [0.00000010338, 1.27389725279, 10022.06384393071],
    [0.0000000785, 5.83678641323, 2700.4713229023],
    [0.00000008102, 5.53289540376, 13366.21664263171],
    [0.0000000747, 5.23301908403, 397.9051859247],
    [0.00000007391, 2.50557265473, 15643.9240207933],
    [0.00000007798, 2.64875005153, 6127.8992680407],
    [0.00000007318, 5.33110036381, 1751.2957139325],
    [0.00000007398, 2.40080315235, 2942.21960580809],
    [0.00000007, 2.2414141491, 3343.8917275653],
    [0.00000006961, 0.94833631216, 5629.2002876947],
    [0.00000007023, 1.85516355349, 13362.2058893157],
    [0.0000000681, 5.194988267, 4690.23601887509],
    [0.00000006681, 3.04162525271, 3178.38960805111],
    [0.00000006243, 1.53240997706, 6298.57213865991],
    [0.00000006294, 3.08194615517, 3503.3228803155],
    [0.00000006358, 4.0205451547, 3316.97780643551],
    [0.00000007854, 4.06615442184, 5729.7502646325],
    [0.00000006174, 3.80238057009, 5088.3850222833],
    [0.00000006298, 2.10322094908, 3364.7346819311],
    [0.00000006734, 4.4549967064, 9830.6328314713],
    [0.0000000759, 3.34937114207, 8962.6991673937],
    [0.00000006074, 3.57121700387, 6151.7777057885],
    [0.00000007279, 5.3506322951, 6894.76776632111],
    [0.00000006015, 0.07301799575, 853.4401992355],
    [0.00000005586, 4.15031997147, 10818.3791043993],
    [0.00000005539, 2.54784312119, 1758.40926093329],
    [0.00000005309, 2.65128148644, 2648.6986429565],
    [0.00000006531, 4.25297171807, 6680.4883498149],
    [0.00000005498, 6.1016966998, 6924.1972748571],
    [0.0000000507, 4.67900323296, 1596.43025976811],
    [0.00000004841, 5.17216869184, 6158.8912527893],
    [0.00000005011, 2.03179616213, 433.9555553603],
    [0.00000005999, 0.30491904963, 2280.98667902709],
    [0.00000004334, 5.65639869182, 12964.5445208745],
    [0.00000005929, 0.88326220381, 796.0541893329],
    [0.00000004781, 5.75441905529, 6144.6641587877],
    [0.00000004633, 2.64397173207, 2914.2580533073],
    [0.00000004948, 5.71673408235, 213.0552779545],
    [0.0000000397, 5.05440080471, 3312.4070567155],
    [0.00000004094, 2.9499117987, 2810.6776441217],
    [0.00000003913, 1.06659787427, 3369.3054316511],
    [0.0000000387, 3.93077011499, 641.12142486571],
    [0.00000004135, 3.45059100231, 4033.0138454101],
    [0.00000005101, 0.31450098972, 4292.0870154669],
    [0.00000003721, 3.02454190848, 3346.3791684907],
    [0.00000003721, 3.09922501016, 3335.3333198759],
    [0.00000004814, 3.069989788, 6688.5822178839],
    [0.00000003684, 5.49241454553, 5621.5991057269],
    [0.00000003561, 0.96460018959, 8274.0646845159],
    [0.00000004122, 1.5746543633, 9866.66069814871],
    [0.00000003629, 5.97000555701, 3304.8283775059],
    [0.00000004333, 3.32433333179, 6.86972951729],
    [0.00000004795, 2.00069285188, 951.9622237341],
    [0.00000003622, 4.42697806631, 1582.2031657665],
    [0.00000003577, 0.15377977803, 3376.88411086071],
    [0.00000004037, 4.02725434804, 8433.00820229911],
    [0.00000003824, 1.42167482126, 8969.8127143945],
    [0.00000003414, 5.22862391511, 10022.1484078857],
    [0.00000004384, 2.51318285232, 11773.6206289989],
    [0.00000004071, 1.88751920598, 3863.4336622771],
    [0.00000003905, 1.88201830658, 8955.58562039291],
    [0.00000004291, 4.14240496655, 2818.2788260895],
    [0.0000000357, 2.45586996283, 1744.1821669317],
    [0.00000003461, 6.16085694117, 7633.1870771337],
    [0.00000003246, 5.21859325685, 149.8070146181],
    [0.0000000316, 1.61898299169, 3980.7535304973],
    [0.00000004113, 3.9362874017, 213.5429129215],
    [0.00000003117, 2.24732563525, 3336.9749088253],
    [0.00000003117, 3.87644128339, 3344.73757954131],
    [0.00000003201, 1.7205224802, 3893.93801205869],
    [0.00000003517, 2.23980933192, 7064.3652031063],
    [0.00000003078, 1.33120857361, 7235.0380737255],
    [0.00000003414, 5.63720914737, 10022.01378728011],
    [0.00000002996, 2.48679790692, 419.72846135871],
    [0.00000003014, 5.98273733492, 10551.7720626775],
    [0.00000003089, 0.21765550994, 13359.1704059337],
    [0.00000003393, 3.36919512514, 3336.8454908673],
    [0.0000000293, 0.54631719683, 2487.1722274643],
    [0.00000002899, 4.81760357159, 155.6642169177],
    [0.00000002868, 2.58098704577, 8270.5415661669],
    [0.00000003341, 4.81114285872, 8031.3360805419],
    [0.00000002771, 0.78165715714, 3.2793008655],
    [0.00000003548, 1.76914289559, 2699.9786368011],
    [0.00000003139, 2.49726447663, 5459.6201045617],
    [0.00000002993, 4.48513822981, 3.76693583251],
    [0.00000002558, 0.74612048217, 7632.6994421667],
    [0.00000002973, 6.11907591951, 398.3928208917],
    [0.00000002555, 3.40863603224, 553.8132203259],
    [0.00000002436, 2.68110734466, 3723.26514143949],
    [0.00000003398, 2.01609731704, 9225.7830907665],
    [0.00000002528, 4.21676297033, 3333.8100074853],
    [0.00000002381, 6.11405773217, 1221.6047488379],
    [0.00000002367, 3.67472867066, 8429.4850839501],
    [0.00000002452, 4.92871549492, 2766.5114458485],
    [0.00000003001, 4.34751038511, 3981.73385156551],
    [0.00000002325, 5.5814134446, 9382.18381126891],
    [0.00000003095, 0.15312862288, 6283.3196674749],
    [0.00000002582, 1.41863449393, 5085.2822285985],
    [0.00000002407, 5.52690969383, 9808.78200214491],
    [0.00000002189, 5.03087631941, 4407.3517213733],
    [0.00000002276, 5.75323373198, 1194.2031927411],
    [0.00000002512, 0.31371446538, 16173.6149858879],
    [0.00000002182, 3.76616453203, 1751.7833488995],
    [0.00000002219, 5.63570258068, 8030.8484455749],
    [0.00000002433, 2.80111269508, 11081.46302777211],
    [0.00000002433, 6.03898534156, 5828.2722891311],
    [0.00000002109, 2.06281789191, 15114.2330556987],
    [0.00000002719, 2.13406336652, 6468.1695754451],
    [0.00000002025, 1.2018661711, 3915.2010425181],
    [0.00000001887, 4.88253130307, 76.50988875911],
    [0.00000001853, 3.38166474355, 6151.2900708215],
    [0.00000001844, 1.2187530027, 1692.40948698591],
    [0.00000002127, 1.64433014539, 3347.90248088131],
    [0.00000001808, 2.176902411, 6040.5910635009],
    [0.00000001865, 6.06509881975, 13760.8425276909],
    [0.00000001998, 1.41278142272, 5084.7945936315],
    [0.00000001821, 1.67609459019, 5099.50932260011],
    [0.0000000197, 3.64755835075, 8827.6340873583],
    [0.00000001948, 0.91793732483, 5099.0216876331],
    [0.00000001717, 3.64496480459, 13362.7107779349],
    [0.00000001785, 0.87660197618, 6660.6932753907],
    [0.00000001744, 0.22355262774, 6816.53375091851],
    [0.00000001717, 1.61419317923, 13362.6762706305],
    [0.00000001955, 2.06919305164, 191.6920835951],
    [0.00000001839, 3.74018886236, 220.6564599223],
    [0.00000001739, 2.07821758598, 3281.4823822697],
    [0.00000002059, 5.55274042469, 26725.1432310819],
    [0.00000001828, 4.0882061294, 6247.7569330063],
    [0.00000002136, 0.14789369077, 6872.91693699471],
    [0.00000001698, 4.04558966245, 3400.23010609691],
    [0.00000001534, 4.85765567337, 574.10098085129],
    [0.00000001533, 1.465453875, 3877.6607562787],
    [0.00000001541, 3.10239552544, 3495.78900865049],
    [0.00000001628, 2.88073838002, 10023.06141865111],
    [0.00000001807, 3.79979542581, 6696.72114206811],
    [0.00000001767, 1.0791154745, 6661.11335148431],
    [0.00000001525, 4.4007381131, 206.42936592071],
    [0.00000001957, 2.1474686461, 7234.5504387585],
    [0.00000001381, 2.72417969364, 11216.5281078075],
    [0.00000001688, 3.32715704311, 7108.06686175911],
    [0.00000001517, 0.44332021975, 3340.38586286849],
    [0.00000001506, 2.34509908751, 8440.1217492999],
    [0.00000001379, 2.83386638398, 3127.0695137783],
    [0.0000000136, 0.70558062923, 3074.24920246151],
    [0.00000001516, 4.69574172401, 3340.3513555641],
    [0.00000001302, 2.98694119189, 6666.2161996981],
    [0.00000001588, 5.82625124459, 8672.21368792411],
    [0.00000001305, 5.68793557454, 6701.8239902819],
    [0.00000001529, 5.28219831652, 3547.0417926205],
    [0.00000001317, 3.02872149081, 7063.87756813929],
    [0.00000001316, 1.55707216163, 8432.52056733209],
    [0.0000000151, 0.81852178414, 3134.67069574611],
    [0.00000001232, 2.92729735592, 1228.7182958387],
    [0.00000001498, 1.47147884583, 10014.9675505821],
    [0.0000000124, 3.54817212305, 6836.40143535029],
    [0.00000001407, 2.83762149372, 18984.5364474931],
    [0.00000001219, 5.41832780376, 3607.46328590511],
    [0.00000001443, 6.05937575283, 1059.1381127057],
    [0.00000001157, 5.97375778288, 110.45013870291],
    [0.00000001195, 5.00661978579, 11371.9485072417],
    [0.00000001173, 2.57988132706, 10575.1628654583],
    [0.00000001175, 0.33045598221, 3320.0808486909],
    [0.00000001171, 5.7856351049, 3361.6316396757],
    [0.00000001509, 3.03783113783, 6702.2440663755],
    [0.00000001157, 5.78853307616, 10235.3801930209],
    [0.00000001097, 1.70038513078, 12936.0953334067],
    [0.00000001517, 4.49354530734, 3097.64000524229],
    [0.00000001089, 0.71436474935, 3170.1833735641],
    [0.00000001068, 2.16721753485, 6685.0590995349],
    [0.00000001082, 0.90416583587, 6531.9054737485],
    [0.00000001365, 2.52562707978, 1039.27042827391],
    [0.00000001415, 1.04940944586, 647.25465079831],
    [0.00000001028, 3.74893297531, 6261.9840270079],
    [0.0000000102, 5.40926634456, 3511.5291148025],
    [0.00000001072, 1.73998305445, 6677.8782422313],
    [0.00000000994, 5.42870395574, 2921.37160030811],
    [0.0000000096, 4.58361434342, 383.1403497067],
    [0.00000001295, 2.76284732234, 3738.51761262449],
    [0.00000001081, 4.69614075629, 2906.6568713395],
    [0.00000000958, 4.89612401533, 4989.3030013807],
    [0.00000000985, 2.19704028035, 8425.8946552983],
    [0.00000000957, 1.53635048068, 10575.6505004253],
    [0.00000000922, 2.99315435276, 9468.51169474051],
    [0.00000000997, 4.10815936593, 4562.2171755377],
    [0.00000000918, 4.8195029917, 13171.2452581711],
    [0.00000000929, 1.18788761625, 10973.3118688665],
    [0.00000000902, 4.76870494203, 3561.26888662211],
    [0.00000001212, 3.94993855439, 2804.05173208791],
    [0.00000000887, 0.78830627399, 3760.3408880585],
    [0.00000000876, 0.12213576951, 956.53297345411],
    [0.00000001037, 1.02819591637, 9779.3524936089],
    [0.00000000929, 4.41328786684, 9070.3626913323],
    [0.00000000857, 4.3356165254, 1592.3521961493],
    [0.0000000084, 4.83838107436, 2126.1212248627],
    [0.00000000845, 1.2469666777, 3120.4436017445],
    [0.00000000954, 4.20015685079, 2920.8839653411],
    [0.0000000088, 0.90436690304, 3313.45468808651],
    [0.0000000101, 5.76000534522, 3253.5480396435],
    [0.00000001124, 0.12127908301, 10973.7995038335],
    [0.0000000087, 5.21940272331, 3368.25780028011],
    [0.00000000983, 2.93323832693, 9595.4829067069],
    [0.00000000852, 3.66784511212, 11770.0975106499],
    [0.00000000833, 5.80230695626, 8962.2115324267],
    [0.00000000824, 4.16051327422, 1861.5020351519],
    [0.00000000974, 0.36383884525, 3428.16444872311],
    [0.00000001121, 5.8588247069, 16706.8290693315],
    [0.00000000794, 0.32208800868, 9168.88471583091],
    [0.00000001033, 5.81660979366, 5091.90814063229],
    [0.00000000766, 1.17417157046, 3443.94901840191],
    [0.00000000797, 2.84449171095, 6282.83203250789],
    [0.00000000758, 4.49492748161, 14158.9915310991],
    [0.00000000758, 2.48905294849, 10404.9776298061],
    [0.00000000769, 1.88091311578, 9639.18456535971],
    [0.00000000762, 5.92055363129, 2699.49100183409],
    [0.0000000074, 4.94266271898, 6438.2524319421],
    [0.00000000761, 1.45394111452, 633.0275567967],
    [0.000000008, 3.2207341297, 6519.0020347509],
    [0.00000000725, 1.60564980223, 6475.28312244591],
    [0.0000000073, 1.45023184025, 6709.91785835091],
    [0.00000000766, 1.5265894773, 3148.9203431047],
    [0.00000000795, 5.99980742469, 16305.1569475743],
    [0.00000000701, 1.7075264057, 4569.3307225385],
    [0.0000000075, 4.51008391137, 3297.1373318783],
    [0.00000000762, 5.03600553177, 2544.07060239989],
    [0.00000000695, 4.07175238073, 2700.9589578693],
    [0.00000000688, 3.43319222752, 10029.1946445837],
    [0.00000000923, 3.9799504457, 10177.01386205009],
    [0.00000000737, 1.61369812975, 3384.5751564883],
    [0.00000000674, 1.39948916768, 2807.6421607397],
    [0.00000000845, 5.55184542363, 9499.5036794891],
    [0.00000000645, 2.88294630681, 1214.4912018371],
    [0.00000000629, 5.00231468326, 3237.7634699647],
    [0.00000000627, 5.82288957282, 13149.3944288447],
    [0.00000000632, 1.23957157188, 6605.2025996075],
    [0.0000000071, 2.32417028248, 6461.0560284443],
    [0.00000000701, 1.02423412249, 3370.2857527193],
    [0.00000000701, 5.09953279615, 3311.4267356473],
    [0.00000000607, 4.60165319406, 949.4194264533],
    [0.00000000603, 1.15354487403, 12566.3955174663],
    [0.00000000605, 2.98188951224, 11243.9296639043],
    [0.00000000719, 1.82710736781, 12310.42514109431],
    [0.00000000585, 4.85846707144, 5827.78465416409],
    [0.00000000622, 4.05950257993, 7903.3172372045],
    [0.00000000633, 0.4321582231, 691.9137837433],
    [0.00000000601, 5.3861978807, 9778.8648586419],
    [0.0000000058, 2.11695908203, 16702.81831601549],
    [0.00000000598, 0.58815457615, 3340.8734978355],
    [0.00000000587, 4.41097801741, 13517.62628874989],
    [0.00000000646, 4.20454528693, 2111.8941308611],
    [0.00000000592, 3.16453997147, 2301.8296333929],
    [0.00000000598, 4.84056601855, 3340.83899053111],
    [0.00000000551, 5.78297804099, 2693.3577759015],
    [0.00000000544, 0.40037320261, 16699.7828326335],
    [0.00000000623, 0.15815938701, 10264.80970155691],
    [0.00000000539, 5.53287635175, 3490.4194413179],
    [0.00000000568, 1.11670802046, 1437.41943168211],
    [0.00000000557, 5.56701497497, 13362.7608345855],
    [0.0000000053, 1.26498700457, 4555.59126350391],
    [0.00000000647, 5.65099181873, 4393.1246273717],
    [0.00000000575, 0.86535292594, 5884.68302909969],
    [0.00000000529, 4.63607035545, 1376.0176173293],
    [0.00000000537, 4.72219269506, 3874.07032762691],
    [0.00000000584, 0.55160568707, 4194.0526259353],
    [0.00000000507, 3.76393309357, 2177.8939048085],
    [0.00000000505, 6.09136336929, 9485.2765854875],
    [0.0000000051, 1.0309972151, 11243.44202893729],
    [0.00000000528, 1.66505268096, 4555.10362853689],
    [0.00000000499, 2.36218211072, 3340.43591951909],
    [0.00000000501, 1.36886135802, 224.5886131854],
    [0.00000000525, 2.51966753829, 6684.5041542651],
    [0.0000000067, 4.37490154824, 6657.59023313531],
    [0.00000000634, 3.19136146041, 242.4847864905],
    [0.00000000513, 3.36933959417, 3233.19272024471],
    [0.0000000049, 2.60477713212, 3774.56798206011],
    [0.00000000634, 5.269652394, 2707.58486990309],
    [0.00000000613, 2.82952730632, 5989.3110696563],
    [0.00000000492, 2.75435833662, 3448.5197681219],
    [0.00000000616, 3.59514782008, 5642.4420600927],
    [0.00000000555, 2.23497332858, 18454.8454823985],
    [0.00000000463, 6.10086251037, 3229.6696018957],
    [0.00000000507, 1.16009561745, 4136.66661603269],
    [0.00000000477, 2.09135717365, 12296.1980470927],
    [0.00000000462, 2.91184106959, 8827.14645239129],
    [0.00000000444, 2.38797656832, 6705.3471086309],
    [0.00000000549, 4.75768179775, 3333.2550622155],
    [0.00000000443, 0.02288008382, 3452.04288647091],
    [0.00000000557, 5.97553834508, 13362.62621397991],
    [0.00000000437, 3.02498984395, 13915.77529215809],
    [0.00000000498, 2.76996723863, 3340.3012989135],
    [0.00000000424, 1.01652866287, 2301.34199842589],
    [0.00000000433, 2.91189244542, 6843.9353070153],
    [0.00000000494, 1.91460459095, 13207.27312484851],
    [0.00000000402, 0.14915077619, 6571.2623496637],
    [0.00000000453, 4.81695891547, 3184.9482097821],
    [0.00000000413, 2.77396890115, 8800.2325312615],
    [0.00000000407, 4.5110727676, 6048.6849315699],
    [0.00000000488, 1.41132277574, 2222.1004520805],
    [0.00000000556, 5.04224552796, 6034.4578375683],
    [0.00000000421, 2.92790084389, 4379.8828549737],
    [0.00000000472, 5.05170315567, 4937.0426864679],
    [0.00000000392, 0.42258961591, 134.8212625519],
    [0.00000000515, 3.61483236959, 6675.9457465757],
    [0.00000000407, 0.15253113909, 3392.13658204571],
    [0.00000000407, 5.97123577955, 3289.5759063209],
    [0.00000000474, 0.17716199109, 13892.3844893773],
    [0.00000000426, 1.29874033367, 11614.6771112157],
    [0.00000000384, 4.23498307074, 6685.3500062411],
    [0.00000000407, 1.89011389134, 4569.8183575055],
    [0.00000000495, 5.80210043627, 13119.47728534169],
    [0.00000000366, 1.32035636914, 263.3277408563],
    [0.0000000037, 6.07332435935, 3274.36883526891],
    [0.00000000359, 5.81278544284, 5614.48555872609],
    [0.00000000358, 2.73133393931, 7910.4307842053],
    [0.0000000036, 0.05052083677, 3407.3436530977],
    [0.00000000402, 0.72673376114, 7895.7160552367],
    [0.00000000453, 0.52830795973, 3113.3801113943],
    [0.00000000394, 4.52689788759, 9588.3693597061],
    [0.00000000341, 3.01339564635, 15.49628866851],
    [0.00000000341, 6.24862667433, 2384.0794532457],
    [0.00000000358, 2.84383303933, 20.11150191529],
    [0.00000000352, 0.94525987632, 12721.32828193349],
    [0.00000000422, 0.62253449322, 19514.2274125877],
    [0.00000000463, 3.67985340584, 3870.0595743109],
    [0.00000000334, 5.92598354309, 10595.9382609507],
    [0.00000000333, 6.01075923274, 5725.1795149125],
    [0.00000000342, 0.47650593061, 9380.71585523369],
    [0.00000000373, 4.44069988433, 10021.1007765147],
    [0.0000000038, 0.32090210218, 7909.94314923829],
    [0.00000000375, 2.90510047685, 11611.1539928667],
    [0.00000000335, 2.98607740801, 2939.1841224261],
    [0.0000000034, 2.07426818439, 7321.36595719711],
    [0.00000000374, 2.46295414488, 3415.63784275061],
    [0.0000000033, 3.45448516287, 6677.4579175671],
    [0.00000000412, 5.59490712507, 3568.3323769723],
    [0.0000000031, 3.13768335245, 14422.0754544719],
    [0.00000000318, 6.27020713981, 16460.08971204149],
    [0.00000000338, 4.3405171383, 10177.5014970171],
    [0.0000000033, 5.62835935709, 3362.70707350971],
    [0.0000000033, 0.49540756155, 3319.0054148569],
    [0.00000000348, 4.0465132962, 9602.5964537077],
    [0.00000000329, 3.37223997989, 10042.8564930753],
    [0.00000000312, 3.98131656363, 323.74923414091],
    [0.0000000034, 3.21428644968, 22325.1488741929],
    [0.00000000403, 0.0669848121, 6040.10342853389],
    [0.0000000039, 0.53675687816, 6717.49653756051],
    [0.00000000324, 2.24331129239, 14584.5420906041],
    [0.00000000298, 5.27497484425, 3417.1223154589],
    [0.00000000291, 6.25952120602, 6645.4408042057],
    [0.00000000293, 2.11859534056, 2676.10019905331],
    [0.00000000332, 4.66699998645, 4459.61203628611],
    [0.00000000279, 1.5143236232, 5732.2930619133],
    [0.00000000304, 2.34814397808, 7204.04608897691],
    [0.0000000028, 6.06841216963, 3283.9578692477],
    [0.0000000028, 0.05535474901, 3397.7546191189],
    [0.00000000283, 5.58365349934, 262.84010588929],
    [0.00000000325, 3.66770932208, 3266.074645616],
    [0.0000000028, 1.83816934995, 6688.51490758111],
    [0.00000000284, 5.0132091908, 5244.2930566845],
    [0.00000000363, 1.22201726104, 10001.3057020905],
    [0.00000000267, 4.73707730483, 7255.8134692179],
    [0.00000000348, 2.92764569897, 1990.5011995575],
    [0.00000000329, 0.89716729335, 162.2228186487],
    [0.00000000356, 1.66181940614, 1162.7185218913],
    [0.00000000345, 4.96215457144, 426.3543733925],
    [0.00000000312, 5.57285955038, 7255.3258342509],
    [0.0000000026, 1.67326547526, 11766.5070819981],
    [0.00000000312, 5.2756621363, 3914.71340755109],
    [0.00000000261, 5.93685801944, 1588.82907780029],
    [0.0000000026, 4.76140916156, 11769.6098756829],
    [0.00000000259, 1.56016916326, 5033.0219136857],
    [0.00000000257, 6.15643297218, 205.9417309537],
    [0.00000000253, 0.11888703466, 17101.4549543907],
    [0.00000000253, 1.95240011543, 16703.28869733031],
    [0.00000000253, 5.79371922564, 6948.0757126049],
    [0.00000000278, 4.67460813376, 7322.34627826531],
    [0.00000000255, 2.05970747935, 11780.7341759997],
    [0.00000000282, 0.09128513887, 860.55374623631],
    [0.00000000253, 3.98317215792, 16703.3232046347],
    [0.00000000256, 0.0414390411, 13936.5506876505],
    [0.0000000024, 1.10034150476, 2274.3607669933],
    [0.00000000246, 4.96426688535, 3377.4616094875],
    [0.00000000246, 1.15950003329, 3304.25087887911],
    [0.0000000027, 3.50813287021, 1222.09238380491],
    [0.00000000243, 2.01100242811, 16276.7077601065],
    [0.00000000253, 0.46888034698, 14314.4119305333],
    [0.00000000225, 2.07472210939, 10018.4906689311],
    [0.00000000227, 1.47944997014, 5305.6948710373],
    [0.00000000284, 0.56682884608, 10157.14617761831],
    [0.00000000244, 2.91803013526, 2074.8011305899],
    [0.00000000243, 5.89092212082, 30065.7556577817],
    [0.00000000218, 1.77863871509, 3030.01544531491],
    [0.0000000022, 4.80019837521, 16858.23871544969],
    [0.00000000221, 4.00597278506, 4005.61228931331],
    [0.00000000213, 4.55100609184, 533.45790092711],
    [0.00000000224, 2.50666934513, 10025.6715262347],
    [0.00000000216, 4.14679941286, 10037.33356876791],
    [0.00000000213, 3.70755893129, 10448.6792884589],
    [0.00000000219, 5.94253384867, 23.63462026429],
    [0.00000000218, 1.47351363921, 5641.9544251257],
    [0.00000000211, 2.33151051616, 6944.5525942559],
    [0.00000000215, 2.61877455491, 3212.83740084591],
    [0.00000000234, 5.47804588842, 3185.5031550519],
    [0.00000000212, 2.89638437903, 3553.66770465429],
    [0.0000000027, 1.43547945741, 16061.94070863329],
    [0.00000000214, 1.54073481456, 1545.1101654953],
    [0.00000000213, 1.38873772382, 17925.1545173039],
    [0.00000000206, 2.74922501212, 15663.79170522509],
    [0.00000000201, 5.99561851209, 1835.56843509031],
    [0.00000000211, 3.74100683574, 3230.64992296391],
    [0.00000000198, 4.9375355625, 6578.3758966645],
    [0.00000000204, 2.32132107344, 12323.17927852529],
    [0.00000000204, 3.50487863763, 3468.8750875207],
    [0.00000000213, 5.3888607005, 7747.96414807311],
    [0.00000000197, 2.51048924008, 3340.9235544861],
    [0.00000000221, 0.64591178951, 3496.20933331471],
    [0.00000000193, 4.34388166294, 3651.6970430517],
    [0.00000000191, 5.30120263654, 14712.5609339415],
    [0.00000000242, 2.25789470004, 6622.0948089695],
    [0.00000000191, 0.52002727082, 2480.0586804635],
    [0.00000000188, 1.00360687694, 103.3365917021],
    [0.0000000019, 5.85285761744, 15508.8589407579],
    [0.00000000182, 3.99129735579, 8543.2145235185],
    [0.00000000233, 1.89171200408, 13916.2629271251],
    [0.000000002, 2.50870443352, 6677.5873355251],
    [0.00000000249, 3.21111672139, 699.02733074409],
    [0.00000000237, 3.11974305123, 7373.13863714289],
    [0.00000000202, 6.2017141032, 12012.8261146239],
    [0.00000000205, 6.27868730147, 2946.2303591241],
    [0.0000000023, 2.4482892293, 1903.19299501769],
    [0.00000000239, 5.27789619503, 6107.1238725483],
    [0.000000002, 1.41969751355, 10001.72577818411],
    [0.00000000174, 4.74303003189, 6457.1238751812],
    [0.00000000188, 1.45966800471, 2388.6502029657],
    [0.00000000171, 2.8666425553, 6756.2502694504],
    [0.00000000174, 1.67176462211, 6418.38474751031],
    [0.00000000182, 5.80990388322, 6887.6542193203],
    [0.00000000172, 1.88607439867, 19402.55313533309],
    [0.00000000169, 2.92046854649, 522.3336006103],
    [0.00000000176, 2.54512773213, 7896.20369020371],
    [0.00000000169, 5.91099958335, 5618.5636223449],
    [0.00000000168, 6.18245369751, 13575.9926197207],
    [0.00000000184, 2.36726292588, 7218.2731829785],
    [0.00000000166, 2.25729247368, 15651.03756779411],
    [0.00000000212, 3.23189207115, 13363.67384535091],
    [0.00000000169, 5.08944200441, 2655.8121899573],
    [0.00000000194, 3.66940007407, 9491.90249752129],
    [0.00000000168, 6.08545323308, 7314.2524101963],
    [0.00000000177, 6.17969940479, 3341.3489302845],
    [0.0000000016, 4.59837771648, 1903.6806299847],
    [0.00000000159, 1.0646415316, 2008.8013566425],
    [0.00000000177, 3.64016669145, 6686.9915951905],
    [0.0000000021, 4.66026492368, 4032.52621044309],
    [0.00000000192, 1.70886670681, 2751.79141717511],
    [0.00000000153, 0.18475722423, 2803.56409712089],
    [0.00000000153, 2.83652315799, 3334.1725803092],
    [0.00000000153, 3.28724376065, 3347.53990805741],
    [0.00000000152, 4.87261249749, 5486.53402569149],
    [0.00000000154, 0.41279284728, 3499.7997619665],
    [0.00000000151, 0.41038595803, 14054.36349054249],
    [0.00000000169, 0.15695053633, 19645.7693742741],
    [0.00000000197, 2.91931470058, 3340.78893388051],
    [0.00000000195, 5.14062276406, 6546.4035908477],
    [0.00000000185, 4.38503970138, 1331.8110700573],
    [0.00000000148, 0.31282714714, 14712.07329897449],
    [0.00000000196, 1.90639910627, 8982.5668518255],
    [0.00000000158, 3.0391318085, 14557.1405345073],
    [0.00000000171, 2.92459964259, 1063.14886602171],
    [0.0000000014, 0.03075322131, 2786.7992063739],
    [0.00000000149, 3.48529084084, 13518.1139237169],
    [0.0000000015, 5.75127697164, 736.1203310153],
    [0.0000000014, 2.21026127637, 4039.6397574439],
    [0.00000000148, 1.43179985105, 3053.89388306271],
    [0.00000000141, 0.98834721175, 7380.2521841437],
    [0.00000000187, 2.80618192029, 2409.4931573315],
    [0.0000000014, 5.61689203595, 6692.10533623291],
    [0.00000000171, 1.75603422806, 14.47091148511],
    [0.00000000135, 3.59243401079, 4076.7327577151],
    [0.00000000135, 2.53133290785, 2604.9797306515],
    [0.00000000134, 3.70948493588, 13554.1417903943],
    [0.00000000133, 0.65445531734, 3191.29304704871],
    [0.00000000177, 0.2634535629, 2277.4635606781],
    [0.00000000177, 0.1039343156, 8959.1760490447],
    [0.00000000135, 0.48499376881, 3347.4821562171],
    [0.00000000178, 3.44835944864, 2284.5097973761],
    [0.00000000175, 3.29098160153, 8966.2222857427],
    [0.00000000131, 5.54343293251, 9375.0702642681],
    [0.0000000016, 6.0236790589, 2494.28577446509],
    [0.00000000129, 0.75365086927, 6680.99828956829],
    [0.00000000152, 6.26142645482, 12722.7962379687],
    [0.00000000138, 6.18657392368, 20047.4414960313],
    [0.00000000171, 5.54655180913, 75.0254160508],
    [0.00000000129, 0.14024939993, 4846.1440532763],
    [0.00000000134, 1.05473100111, 4025.9002984093],
    [0.00000000129, 2.83674099689, 11670.5278547803],
    [0.00000000129, 5.00605848212, 6680.9637822639],
    [0.00000000157, 5.1673952491, 9389.2973582697],
    [0.00000000126, 3.2132814179, 6148.2545874395],
    [0.00000000176, 4.78085909788, 21.0192129759],
    [0.00000000169, 3.25531409251, 19004.4041319249],
    [0.00000000155, 4.42535125499, 3929.9210711915],
    [0.0000000015, 2.94620445414, 3077.77232081051],
    [0.00000000133, 5.83390369046, 12840.1161061889],
    [0.00000000137, 4.24430027174, 6674.4224341851],
    [0.00000000129, 4.58072373782, 18606.25512851669],
    [0.00000000146, 5.60096860073, 3284.0529820135],
    [0.00000000146, 0.52279831791, 3397.6595063531],
    [0.0000000013, 3.84203213016, 1505.04399160949],
    [0.00000000133, 4.692735433, 3627.8186053039],
    [0.00000000125, 3.57968087835, 4672.42349675709],
    [0.00000000124, 6.1167034703, 6594.1604663433],
    [0.00000000135, 1.74343590305, 7902.8296022375],
    [0.00000000147, 3.59302955145, 536.5606946119],
    [0.00000000123, 0.40369530083, 1486.2239385487],
    [0.00000000125, 4.15712748419, 15265.64270181689],
    [0.00000000121, 6.00453207609, 4534.81561944089],
    [0.00000000134, 4.72288196608, 2288.58786099491],
    [0.00000000119, 2.99117658049, 74.53778108379],
    [0.00000000146, 2.76908101941, 1479.11039154791],
    [0.00000000117, 2.066212359, 3344.36210888011],
    [0.00000000117, 0.91596190605, 3337.3503794865],
    [0.00000000147, 1.07606700174, 6510.7958002639],
    [0.00000000118, 4.23793013469, 3531.81687532789],
    [0.0000000016, 1.90920939107, 3451.0625654027],
    [0.00000000117, 5.16837558174, 3337.31587218211],
    [0.00000000117, 4.09698399049, 3344.3966161845],
    [0.00000000118, 4.20346162229, 9887.0160175475],
    [0.00000000119, 1.28976261169, 15907.0079441661],
    [0.00000000154, 0.46709104782, 3134.1555068867],
    [0.00000000118, 1.33279043667, 3363.62474079271],
    [0.00000000118, 4.79097648197, 3318.08774757391],
    [0.00000000117, 1.0617952969, 3184.4555236809],
    [0.00000000117, 5.06197162174, 3497.2569646857],
    [0.00000000115, 1.85848730524, 6725.18758318811],
    [0.00000000116, 2.88106561931, 5243.80542171749],
    [0.00000000124, 3.17992351939, 2631.86644190671],
    [0.00000000135, 3.17784971271, 3603.9401675561],
    [0.00000000112, 6.10617816315, 9065.7919416123],
    [0.00000000152, 1.84450072046, 1.22413855171],
    [0.00000000127, 1.15557216374, 7366.02509014209],
    [0.00000000119, 5.17512579994, 16511.8576848709],
    [0.00000000113, 2.7415754921, 13745.5900565059],
    [0.00000000155, 0.79710150138, 6155.3008241375],
    [0.00000000115, 3.22959858043, 6997.8605405397],
    [0.00000000114, 6.28123647971, 632.5399218297],
    [0.00000000111, 6.2135421841, 87.55202202331],
    [0.00000000114, 1.52685816324, 3987.86707749811],
    [0.00000000125, 6.02617311099, 5821.1587421303],
    [0.00000000138, 4.58751267867, 2233.71743849851],
    [0.00000000149, 3.08301584779, 7373.62627210991],
    [0.00000000131, 5.25025552048, 6901.8813133219],
    [0.00000000107, 2.71978809026, 2973.63191522091],
    [0.00000000107, 4.99897363633, 4672.91113172411],
    [0.00000000145, 2.57143715237, 2060.5740365883],
    [0.00000000111, 2.15551948866, 6357.9632542257],
    [0.00000000112, 2.39993760456, 2575.0631797369],
    [0.00000000139, 5.6597195525, 3547.5569814799],
    [0.00000000122, 2.84793235795, 3346.71344648291],
    [0.00000000122, 3.27583456069, 3334.99904188371],
    [0.00000000114, 3.01986257881, 931.60690433531],
    [0.00000000112, 3.01795120085, 7079.1300393243],
    [0.00000000108, 3.30807311845, 8584.41784841729],
    [0.00000000141, 2.88317170767, 2907.1445063065],
    [0.00000000139, 4.4592500647, 5518.9939664753],
    [0.00000000115, 6.13734279118, 4399.7505394055],
    [0.00000000103, 5.27914306931, 2487.6598624313],
    [0.0000000014, 4.52778173929, 6670.8320055333],
    [0.00000000105, 5.17193563022, 2957.4720769931],
    [0.00000000102, 3.47030687176, 316.14805217309],
    [0.000000001, 1.01169943823, 17918.0409703031],
    [0.0000000012, 4.71438356567, 3311.3644258799],
    [0.0000000012, 1.40938335297, 3370.34806248671],
    [0.00000000118, 0.83092751777, 6606.6870723158],
    [0.00000000098, 2.88130937597, 17468.6113804619],
    [0.00000000097, 3.61583991386, 8859.60639317511],
    [0.00000000107, 1.96982954301, 2391.1930002465],
    [0.00000000132, 4.17534294218, 3050.3707647137],
    [0.00000000106, 4.20312239248, 2641.5850959557],
    [0.00000000097, 3.7230847974, 22345.0165586247],
    [0.00000000101, 2.19730971635, 10125.1738718015],
    [0.00000000104, 0.3523535688, 4297.14540015391],
    [0.00000000096, 5.64087470447, 2679.62331740231],
    [0.00000000111, 6.0015220095, 10042.4364169817],
    [0.0000000011, 6.2583955265, 2913.7704183403],
    [0.00000000096, 3.26945343269, 10006.8286263979],
    [0.00000000112, 2.22451688549, 11251.04321090511],
    [0.00000000096, 1.66024188153, 59.13004443009],
    [0.00000000108, 6.12490206072, 3735.48212924251],
    [0.00000000092, 3.39937164286, 3708.0805731457],
    [0.00000000097, 2.13065182863, 2922.35192137631],
    [0.00000000127, 3.31547807544, 4272.21933103511],
    [0.00000000117, 3.74695427979, 12168.2465140581],
    [0.00000000116, 6.20968192934, 10213.5293636945],
    [0.00000000115, 1.94977986471, 9815.8955491457],
    [0.00000000093, 2.14817772588, 2772.0343701559],
    [0.00000000104, 3.71898659352, 6033.9702026013],
    [0.00000000091, 3.61425883493, 169.3363656495],
    [0.0000000009, 4.44081930332, 2541.03511901791],
    [0.000000001, 0.09021007523, 26887.6098672141],
    [0.00000000096, 1.76469942098, 640.6337898987],
    [0.0000000009, 1.28021880619, 846.3266522347],
    [0.00000000089, 3.39079978165, 2817.7911911225],
    [0.00000000115, 3.89643144493, 1648.2029397139],
    [0.00000000096, 2.94289920307, 4049.8460464599],
    [0.00000000113, 4.93121954959, 4922.8155924663],
    [0.00000000087, 1.02670558277, 1118.5119746193],
    [0.00000000094, 3.25084340693, 1272.9248431107],
    [0.0000000011, 2.48041052275, 21795.4579090983],
    [0.00000000103, 6.11803973071, 12302.8239591265],
    [0.00000000088, 2.15369137259, 17654.5367222661],
    [0.00000000119, 1.94804023984, 3631.3417236529],
    [0.00000000094, 0.15915150031, 10706.63751684189],
    [0.0000000009, 0.48988280834, 19800.7021387413],
    [0.00000000117, 4.65239707285, 1905.70858242391],
    [0.00000000098, 0.70463876405, 6768.77687542291],
    [0.00000000084, 5.11902672644, 3152.93109642071],
    [0.00000000084, 4.14632885534, 3528.7813919459],
    [0.00000000088, 0.91279871901, 36.84918278771],
    [0.00000000112, 3.7458580669, 11925.03027511709],
    [0.00000000093, 1.26569825727, 2538.4923217371],
    [0.00000000091, 3.30441819566, 10714.23869880971],
    [0.00000000094, 3.26149490187, 6048.1972966029],
    [0.0000000011, 4.99537778792, 21946.86755521649],
    [0.00000000085, 6.12081404839, 16490.0068555445],
    [0.00000000097, 1.6091186104, 2170.7803578077],
    [0.00000000094, 4.47849317886, 12943.2088804075],
    [0.00000000088, 1.95089690983, 4040.12739241091],
    [0.00000000107, 0.22183845911, 6286.84278582391],
    [0.00000000082, 0.12897329018, 21548.7185518083],
    [0.00000000081, 5.61725901284, 3355.0833381849],
    [0.00000000081, 0.5065079058, 3326.62915018171],
    [0.00000000085, 3.72310585517, 4106.6493086297],
    [0.00000000082, 6.02187911, 18208.1061251085],
    [0.00000000101, 4.84911356755, 5628.7126527277],
    [0.00000000079, 1.50942161554, 4778.03185838191],
    [0.00000000083, 3.99309879852, 3759.3605669903],
    [0.00000000081, 0.53432576001, 1442.0173912767],
    [0.00000000079, 3.42549882475, 3302.7232085455],
    [0.00000000079, 2.69826809389, 3378.98927982111],
    [0.00000000109, 1.10805610503, 765.54924696289],
    [0.00000000079, 1.18088037992, 9947.2994990156],
    [0.00000000087, 5.4529346931, 3181.91272640011],
    [0.00000000092, 3.38758997686, 684.8002367425],
    [0.00000000078, 2.11522669224, 4025.4126634423],
    [0.00000000106, 5.10676390423, 7214.68275432671],
    [0.00000000079, 1.67803485609, 5562.7128787803],
    [0.00000000094, 5.43559031617, 1655.3164867147],
    [0.00000000077, 2.80318148641, 42942.7481566329],
    [0.00000000096, 1.53353605164, 4447.9950498681],
    [0.00000000079, 5.29022717745, 1169.83206889211],
    [0.00000000077, 0.48002800064, 4002.0891709643],
    [0.00000000075, 3.0273704392, 4988.8153664137],
    [0.00000000103, 3.31511491795, 6279.7965491259],
    [0.00000000075, 1.36914522483, 6710.8981794191],
    [0.000000001, 1.23379947915, 6654.0671147863],
    [0.00000000075, 5.2678149197, 1106.89498820129],
    [0.00000000085, 3.07884071954, 3031.5779215275],
    [0.00000000085, 3.0449261991, 3650.1345668391],
    [0.00000000102, 5.58829580223, 220.16882495529],
    [0.00000000077, 3.97228899508, 3909.6781182107],
    [0.0000000008, 3.93017018663, 42153.72518556549],
    [0.0000000009, 3.63465564186, 2277.95119564511],
    [0.00000000074, 3.28312495896, 10184.5477337151],
    [0.00000000102, 3.28709663996, 3282.9775481795],
    [0.00000000102, 2.83667027868, 3398.73494018711],
    [0.00000000077, 5.68389652778, 20199.2714668137],
    [0.00000000073, 3.78223099359, 13369.8070712835],
    [0.00000000097, 0.21157168319, 6784.5614451017],
    [0.00000000092, 0.9218844582, 3492.7535252685],
    [0.00000000076, 1.1552514292, 19404.0210913683],
    [0.00000000073, 0.71834577426, 6365.0768012265],
    [0.0000000008, 2.74867343749, 8756.5136189565],
    [0.00000000077, 0.8627916683, 6549.9267091967],
    [0.00000000072, 3.17331282546, 2067.68758358909],
    [0.00000000073, 3.24032193523, 20809.2238071617],
    [0.00000000073, 3.75683220932, 8955.09798542589],
    [0.00000000088, 4.48290442721, 11883.8269502183],
    [0.0000000007, 2.11654601508, 6254.38284504009],
    [0.00000000093, 1.79949400982, 10050.5302850507],
    [0.00000000074, 0.39743697458, 12725.20961729149],
    [0.00000000069, 4.46900086396, 1280.0383901115],
    [0.0000000009, 1.32575986288, 10713.75106384269],
    [0.00000000082, 0.69210206943, 5401.18646328809],
    [0.00000000072, 1.34421235248, 18451.3223640495],
    [0.00000000077, 5.18506287875, 5466.7336515625],
    [0.00000000079, 0.03494157481, 3351.9019444472],
    [0.00000000079, 6.08882534383, 3329.8105439194],
    [0.00000000077, 3.36821374117, 15636.8104737925],
    [0.0000000007, 4.18852998473, 2011.3441539233],
    [0.00000000068, 2.20697305416, 9381.2034902007],
    [0.00000000074, 2.6493550787, 25136.0703357981],
    [0.00000000068, 1.8081618671, 6489.53276980449],
    [0.00000000078, 3.45047388274, 3583.0972131903],
    [0.00000000069, 3.47802563975, 11354.1359851237],
    [0.0000000007, 5.41206396259, 25287.47998191629],
    [0.0000000007, 5.52776045508, 35707.4662654239],
    [0.00000000088, 1.52868546432, 3068.1832868317],
    [0.00000000088, 4.595025703, 3613.52920153491],
    [0.00000000065, 1.82205105922, 15121.3466026995],
    [0.00000000077, 2.56929587888, 14127.99895376209],
    [0.00000000069, 0.02357643792, 43739.0461634493],
    [0.00000000066, 5.74550598907, 5195.48854981791],
    [0.00000000066, 5.74550598907, 5195.0009148509],
    [0.00000000065, 5.47583793528, 6708.8702269799],
    [0.00000000071, 0.41816629111, 10176.94655174729],
    [0.0000000009, 3.58467854106, 6740.84253279671],
    [0.00000000065, 4.81907662858, 4140.6773693487],
    [0.00000000064, 2.78231915414, 9801.6684551441],
    [0.00000000085, 1.40895818486, 43340.8971600411],
    [0.00000000087, 3.48209962852, 9859.6144614507],
    [0.00000000074, 5.03444697014, 10596.4258959177],
    [0.00000000065, 5.65188017283, 6681.0485947895],
    [0.00000000071, 4.85107944455, 4143.2201666295],
    [0.00000000066, 0.3288798999, 3267.2552882681],
    [0.00000000066, 5.79488701874, 3414.4572000985],
    [0.00000000063, 2.79450851807, 6467.68194047809],
    [0.00000000064, 0.70758466822, 3487.66793070691],
    [0.00000000064, 5.41618225042, 3194.0445576597],
    [0.00000000085, 6.17825225561, 10720.8646108435],
    [0.00000000062, 3.01771087976, 35.7840491939],
    [0.00000000062, 6.15930353335, 36.27168416091],
    [0.00000000064, 2.07206554388, 11773.13299403189],
    [0.00000000064, 4.9674380871, 41747.81351144129],
    [0.00000000068, 3.28488221728, 12809.12412144031],
    [0.00000000062, 1.67633734169, 18461.9590293993],
    [0.00000000068, 0.42906740811, 6614.9812619687],
    [0.00000000079, 2.06833189434, 11236.8161169035],
    [0.00000000066, 4.71978579468, 9998.20265983511],
    [0.00000000064, 5.14611248392, 11526.88127170889],
    [0.0000000007, 0.34840349768, 16858.6590401139],
    [0.00000000065, 3.82789901811, 20597.0001455577],
    [0.00000000064, 4.43540244948, 40796.5827401577],
    [0.00000000079, 4.81144487223, 10730.58326489249],
    [0.00000000062, 0.61927789332, 20040.3952593333],
    [0.00000000066, 6.18584312904, 8428.9974489831],
    [0.00000000079, 5.86016787523, 40398.4337367495],
    [0.00000000059, 0.23825712673, 44959.3038585067],
    [0.00000000063, 0.0006946629, 20743.1895259099],
    [0.0000000006, 4.02422394326, 10016.5581732755],
    [0.00000000059, 3.94228594452, 13745.10242153889],
    [0.00000000067, 3.09157172324, 9329.9234963561],
    [0.00000000078, 1.63178356452, 24606.3793707035],
    [0.0000000008, 3.21443220409, 5202.6020968187],
    [0.00000000057, 4.8602630377, 12928.98178640591],
    [0.0000000008, 1.00062919899, 27417.3008323087],
    [0.00000000077, 4.25649384915, 4845.6564183093],
    [0.00000000062, 2.8548246716, 12987.86801335249],
    [0.00000000057, 4.88274674366, 5820.6711071633],
    [0.00000000057, 0.00003539968, 25841.04938475869],
    [0.00000000059, 0.42155176888, 5945.5921573513],
    [0.00000000061, 0.64683968145, 3264.59017290771],
    [0.00000000058, 4.86677635959, 15423.5113783545],
    [0.00000000074, 3.19195801116, 9623.4444592077],
    [0.00000000062, 4.72968550328, 3324.02404313351],
    [0.00000000062, 1.39408141536, 3357.6884452331],
    [0.0000000006, 4.79015337969, 9225.29545579949],
    [0.00000000061, 5.58622273047, 5223.93773728571],
    [0.00000000056, 4.51159263204, 3702.9773809141],
    [0.00000000056, 1.6121742866, 2978.7351074525],
    [0.00000000055, 3.98689536822, 12715.68269096791],
    [0.00000000058, 1.49398235066, 14584.05445563709],
    [0.00000000075, 1.46856818276, 4776.0039059427],
    [0.00000000054, 4.63507585798, 45885.2115799245],
    [0.00000000055, 4.91506650009, 2126.05391455991],
    [0.00000000054, 0.92181027242, 9381.69617630189],
    [0.00000000054, 2.7187729465, 5607.3720117253],
    [0.00000000053, 3.09693738935, 6789.1321948217],
    [0.00000000058, 5.8993420842, 3268.8005108285],
    [0.00000000058, 0.22442483444, 3412.9119775381],
    [0.00000000053, 0.16426574878, 12509.00950756369],
    [0.00000000053, 0.16426574878, 12509.4971425307],
    [0.00000000073, 5.56901413325, 14867.49369840869],
    [0.00000000053, 2.19783708455, 14481.4493163855],
    [0.00000000054, 1.94626267929, 24491.18197509989],
    [0.00000000052, 3.15010220845, 6813.0106325695],
    [0.00000000054, 4.66674950044, 8186.2688450091],
    [0.00000000054, 1.5754080809, 21150.56954840009],
    [0.00000000054, 1.3077305288, 8226.8226538619],
    [0.00000000054, 5.80728044581, 18849.4713674577],
    [0.00000000068, 5.38162441083, 20213.4985608153],
    [0.00000000062, 5.91673914049, 9175.9982628317],
    [0.00000000068, 5.53849729729, 2391.6806352135],
    [0.00000000055, 5.68275033208, 23539.46356884929],
    [0.00000000072, 5.07506580904, 3342.34071689161],
    [0.00000000072, 1.0487011096, 3339.371771475],
    [0.00000000055, 3.59989833025, 6843.4476720483],
    [0.0000000006, 2.16467756824, 4885.72259219509],
    [0.00000000052, 2.30863563499, 7799.73682801889],
    [0.00000000063, 1.59644930072, 21265.7669440037],
    [0.00000000069, 0.54846716464, 24889.33097850809],
    [0.00000000051, 2.96626339056, 37895.6701078509],
    [0.00000000052, 5.38935505875, 45088.42593814109],
    [0.00000000051, 4.59657000491, 12410.9751180321],
    [0.00000000068, 0.08247779224, 1854.38848815109],
    [0.00000000054, 2.06267581529, 2736.0065034785],
    [0.00000000052, 2.02950191708, 16328.48044005229],
    [0.00000000051, 1.1481670562, 16063.4086646685],
    [0.00000000061, 2.80673408688, 2655.74487965451],
    [0.00000000056, 1.41031366215, 8439.6341143329],
    [0.0000000005, 0.09559043051, 1727.90491115171],
    [0.00000000054, 2.84157218677, 5408.78764525591],
    [0.00000000059, 4.25728059212, 12516.6106895315],
    [0.00000000052, 4.01903754148, 4356.03162710049],
    [0.0000000005, 4.41829954403, 3116.5114484814],
    [0.0000000005, 1.70549407364, 3565.2010398852],
    [0.00000000049, 1.47402562828, 55516.6625273317],
    [0.0000000005, 2.19394619075, 3742.5283659405],
    [0.00000000048, 3.12444029552, 1882.83767561889],
    [0.00000000054, 6.04907092105, 20426.8149099055],
    [0.00000000048, 6.10216369462, 16865.28495214769],
    [0.00000000061, 2.3733737425, 19617.3201868063],
    [0.00000000048, 6.23602609768, 19190.7219959303],
    [0.00000000048, 6.14914151023, 24341.28449997309],
    [0.00000000056, 2.19344974157, 10787.3865270623],
    [0.00000000048, 6.18351837234, 44768.3432273621],
    [0.00000000047, 6.0918913822, 13517.55897844709],
    [0.00000000051, 3.13613774695, 5750.1055840313],
    [0.00000000053, 1.88416936813, 1971.70835637129],
    [0.00000000047, 5.48212564317, 11876.7134032175],
    [0.00000000047, 4.23460507904, 2257.59587624631],
    [0.00000000053, 2.37415739297, 20043.43074271529],
    [0.0000000005, 3.70055414539, 32765.00284213229],
    [0.00000000047, 4.84924552555, 39048.5663270907],
    [0.00000000048, 1.43634945815, 135.30889751891],
    [0.00000000064, 1.47620421839, 1329.75590774351],
    [0.00000000051, 3.87515145598, 2693.84541086851],
    [0.00000000055, 4.42106984861, 5834.8982011649],
    [0.00000000046, 4.98957166191, 1795.5022612045],
    [0.00000000055, 2.47584695868, 4403.76129272151],
    [0.00000000048, 5.05121150955, 14955.2895379155],
    [0.00000000059, 0.56447699816, 4290.0318531531],
    [0.00000000047, 3.19086921862, 35464.73766144989],
    [0.00000000047, 3.19086921862, 35465.2252964169],
    [0.00000000045, 4.94702991651, 5835.38583613191],
    [0.00000000052, 5.41422776986, 17660.05964657349],
    [0.00000000048, 5.64285531978, 1859.44687283811],
    [0.00000000056, 5.43434992198, 532.9702659601],
    [0.00000000052, 5.51821932984, 3718.2298520991],
    [0.00000000052, 0.6055475888, 2963.4826362675],
    [0.00000000045, 1.65750320067, 22487.12787535809],
    [0.00000000061, 3.03243825296, 7380.7398191107],
    [0.00000000045, 1.2350790238, 38252.2683202743],
    [0.00000000045, 4.90245609377, 8741.79888998789],
    [0.00000000054, 5.75594735581, 1056.1026293237],
    [0.00000000045, 0.78221109473, 5511.8804194745],
    [0.00000000045, 3.65721451906, 664.99986261351],
    [0.00000000045, 3.65721451906, 664.51222764649],
    [0.00000000045, 1.58220885506, 3973.6399834965],
    [0.00000000044, 1.64971708603, 5401.6740982551],
    [0.00000000054, 3.2268107743, 931.1192693683],
    [0.00000000046, 4.82251193103, 5881.6475457177],
    [0.0000000005, 0.95411798734, 1744.66980189871],
    [0.00000000044, 1.88527980304, 3244.8770169655],
    [0.00000000044, 4.2384871156, 3436.8354714011],
    [0.00000000045, 3.0991523798, 1265.81129610991],
    [0.00000000044, 4.49759555733, 17499.6039577989],
    [0.00000000043, 1.18409883166, 97670.14389541368],
    [0.00000000057, 3.23899428569, 46283.3605833327],
    [0.00000000044, 0.27827134364, 10191.17364574889],
    [0.00000000043, 1.30628712649, 33163.6394805075],
    [0.00000000047, 2.27882129437, 17256.8753538249],
    [0.00000000044, 4.60162306872, 2708.07250487011],
    [0.00000000059, 3.55006619333, 2524.20291796811],
    [0.00000000053, 5.27405250378, 8337.0289750813],
    [0.00000000053, 2.75147057919, 14054.8511255095],
    [0.00000000043, 3.74257202617, 12200.2188198749],
    [0.00000000046, 4.35317089818, 1648.69057468091],
    [0.00000000042, 4.31895676455, 845.8390172677],
    [0.00000000043, 3.06719963334, 41194.7317435659],
    [0.00000000047, 5.75600675804, 13531.78607244869],
    [0.00000000047, 5.82756499631, 15850.1095692305],
    [0.00000000042, 4.34141462634, 12729.9097849695],
    [0.00000000043, 1.95297083066, 15107.1195086979],
    [0.00000000043, 0.33759865283, 8123.7298796433],
    [0.00000000046, 0.42686371231, 2325.1932262991],
    [0.00000000043, 0.62743288585, 14469.34469500049],
    [0.00000000043, 1.18510374809, 2854.8841913937],
    [0.00000000043, 4.93866317055, 3826.82829697291],
    [0.00000000041, 2.91455733252, 42544.5991532247],
    [0.00000000042, 5.52285099034, 2652.2217613055],
    [0.00000000042, 0.04613741618, 38086.6307389955],
    [0.00000000045, 0.35782418393, 3361.1440047087],
    [0.00000000043, 0.97696624636, 28229.94340520789],
    [0.00000000048, 0.38343131297, 12825.8890121873],
    [0.00000000052, 4.39773367298, 6667.2415768815],
    [0.00000000041, 0.69151426786, 3296.20241094311],
    [0.00000000041, 5.43225265078, 3385.5100774235],
    [0.00000000043, 1.84753611816, 46681.5095867409],
    [0.0000000004, 3.38564855874, 6851.04885401611],
    [0.0000000004, 0.97077467865, 8983.0544867925],
    [0.00000000043, 0.96789677579, 20205.89737884749],
    [0.0000000004, 0.36743358073, 20728.9624319083],
    [0.00000000044, 5.64770312853, 29698.5313288193],
    [0.00000000041, 1.9419564307, 4670.36833444331],
    [0.00000000052, 2.83255526859, 3299.3054531985],
    [0.00000000052, 3.29121165005, 3382.4070351681],
    [0.00000000041, 0.22123606904, 48827.6750032161],
    [0.00000000046, 2.01006330908, 19247.6203708659],
    [0.00000000054, 4.52613106738, 3319.59321372389],
    [0.00000000039, 2.0990283282, 743.23387801611],
    [0.00000000039, 5.30952786068, 26357.43126715249],
    [0.00000000039, 5.30952786068, 26357.9189021195],
    [0.00000000049, 3.31851905687, 4025.9676087121],
    [0.00000000054, 0.83545544152, 574.5886158183],
    [0.00000000052, 0.78436364849, 1461.29786942991],
    [0.00000000041, 6.03198869566, 45487.0625765163],
    [0.00000000051, 0.35100574128, 102.84895673509],
    [0.00000000045, 0.25913855607, 2715.1860518709],
    [0.00000000045, 5.86462836257, 3966.52643649571],
];

const Y2: &[Term] = &[
    [0.00068999338, 3.98646823714, 0.2438174835],
    [0.00082190105, 6.20347735626, 3340.8562441833],
    [0.00021826465, 1.79418551007, 6681.46867088311],
    [0.00006036287, 2.31685926546, 10022.0810975829],
    [0.00001291999, 5.44987502837, 3340.36860921629],
    [0.0000112517, 2.69734348224, 13362.6935242827],
    [0.00000182064, 3.05304276213, 16703.3059509825],
    [0.00000172815, 2.94873550203, 3337.33312583431],
    [0.00000164573, 3.04867001053, 3344.3793625323],
    [0.00000128077, 6.01351315277, 6680.98103591609],
    [0.00000093944, 5.65705056742, 3185.43584474911],
    [0.00000089463, 0.46100253521, 3496.2766436175],
    [0.00000040244, 3.43638132202, 6684.9917892321],
    [0.00000036661, 0.03273396254, 1059.6257476727],
    [0.0000002749, 3.40043638863, 20043.9183776823],
    [0.00000024847, 2.00937217942, 3149.4079780717],
    [0.00000023186, 4.00844398003, 3532.3045102949],
    [0.00000024495, 4.15948776712, 2544.5582373669],
    [0.00000020269, 1.87109940843, 4137.1542509997],
    [0.00000018207, 1.86611344735, 3098.1276402093],
    [0.00000017365, 2.5878234089, 2942.7072407751],
    [0.00000016922, 4.25054228122, 3583.5848481573],
    [0.00000016265, 5.7622302945, 5622.08674069391],
    [0.00000015988, 0.04373738136, 1194.6908277081],
    [0.00000015705, 3.19532238212, 3739.0052475915],
    [0.00000013211, 3.5738993808, 1990.9888345245],
    [0.00000016835, 0.77752025128, 2787.2868413409],
    [0.00000012623, 2.17797703414, 2389.1378379327],
    [0.00000013191, 0.10921424588, 10021.5934626159],
    [0.00000012309, 5.52906661092, 3339.8759231151],
    [0.00000015092, 4.96166949645, 1592.8398311163],
    [0.00000011292, 6.01108408051, 6526.04827144891],
    [0.00000012308, 0.55813761009, 3341.83656525151],
    [0.00000011493, 1.28862023253, 796.5418242999],
    [0.00000014005, 5.33903523173, 3894.4256470257],
    [0.00000010521, 0.55697469416, 4400.2381743725],
    [0.00000013157, 4.20120058086, 155.17658195069],
    [0.00000009155, 3.93426364819, 4292.5746504339],
    [0.00000008383, 2.52922143175, 4690.7236538421],
    [0.00000010715, 5.5745631575, 2146.4092339587],
    [0.00000008087, 3.77030329034, 10025.6042159319],
    [0.0000000807, 5.98273424636, 5487.0216606585],
    [0.00000008313, 5.94079629702, 2957.9597119601],
    [0.00000007119, 0.63326970116, 1589.3167127673],
    [0.00000007434, 0.16010588018, 3723.7527764065],
    [0.00000008463, 1.1213169297, 5088.8726572503],
    [0.00000008851, 0.49531276074, 4535.3032544079],
    [0.00000006118, 3.76286762082, 7079.61767429131],
    [0.00000005446, 4.45219169081, 5885.1706640667],
    [0.00000005632, 2.80162657949, 553.32558535889],
    [0.00000005307, 3.82276150159, 242.97242145751],
    [0.00000004779, 0.69754013484, 1748.2602305505],
    [0.00000005798, 3.32076929671, 7.3573644843],
    [0.00000005029, 3.76894152326, 2273.8731320263],
    [0.00000004779, 5.06962801761, 3333.7426971825],
    [0.00000004645, 1.40550063367, 951.4745887671],
    [0.00000005308, 2.47347798651, 6490.0204047715],
    [0.0000000568, 0.65754186652, 529.9347825781],
    [0.00000004316, 5.37670156241, 4933.4522578161],
    [0.00000004455, 6.20652322732, 2288.1002260279],
    [0.00000004106, 5.29894197224, 5092.3957755993],
    [0.00000004484, 2.40351988921, 3870.54720927791],
    [0.00000004129, 1.08737767367, 3347.96979118411],
    [0.00000003982, 3.74330534798, 23384.5308043821],
    [0.00000003668, 3.61786789234, 3340.83899053111],
    [0.00000003668, 5.6486156431, 3340.8734978355],
    [0.00000004603, 2.27732033063, 7477.7666776995],
    [0.00000003137, 2.23673642314, 6438.7400669091],
    [0.00000003223, 0.63128088203, 426.8420083595],
    [0.00000004083, 0.01640199107, 1349.62359217529],
    [0.00000003073, 4.92973254619, 1747.7725955835],
    [0.00000003724, 2.35536621176, 6151.7777057885],
    [0.0000000358, 1.86170380048, 2280.98667902709],
    [0.00000002506, 3.96683857097, 5331.6012612243],
    [0.00000002389, 0.46414156874, 6836.8890703173],
    [0.00000002777, 3.85084197237, 382.6527147397],
    [0.00000002243, 2.10253884289, 1350.1112271423],
    [0.00000002179, 1.14130873025, 6127.8992680407],
    [0.00000002794, 2.98101234342, 6677.9455525341],
    [0.00000002007, 0.96180685485, 6682.44899195131],
    [0.00000002204, 4.14833269588, 9492.3901324883],
    [0.00000001869, 0.85637111445, 4929.92913946711],
    [0.00000001955, 5.49367553822, 6681.45141723091],
    [0.00000002432, 5.68694139605, 640.1411037975],
    [0.00000001785, 3.07914982123, 3554.1553396213],
    [0.00000001956, 1.24043341247, 6681.4859245353],
    [0.00000002128, 0.95091645133, 7740.8506010723],
    [0.00000002132, 1.19742152629, 398.3928208917],
    [0.00000001915, 1.68899605602, 191.2044486281],
    [0.0000000162, 0.87029756453, 7875.91568110771],
    [0.0000000154, 2.82385201055, 3127.5571487453],
    [0.0000000196, 4.59845924354, 6924.1972748571],
    [0.00000001559, 5.48531052433, 2281.4743139941],
    [0.00000001569, 6.04375472798, 8969.8127143945],
    [0.00000001559, 3.60405990781, 8955.58562039291],
    [0.0000000139, 0.44447195188, 13362.2058893157],
    [0.00000001868, 2.55406306387, 5729.7502646325],
    [0.00000001714, 2.83026602085, 6674.3551238823],
    [0.00000001444, 1.21697594403, 2119.00767786191],
    [0.00000001461, 4.09849875613, 13366.21664263171],
    [0.00000001339, 3.68138328651, 2145.92159899169],
    [0.00000001222, 5.19573003811, 6254.8704800071],
    [0.00000001257, 2.41919385934, 641.12142486571],
    [0.00000001485, 0.07665766008, 9866.66069814871],
    [0.00000001566, 4.89472263428, 8962.6991673937],
    [0.0000000116, 0.02227881429, 6298.57213865991],
    [0.00000001124, 4.70721954486, 12833.00255918811],
    [0.00000001479, 4.17535755129, 10420.23010099111],
    [0.00000001201, 1.32662761285, 3767.4544350593],
    [0.00000001207, 1.69591474761, 3340.78893388051],
    [0.00000001207, 1.28745285448, 3340.9235544861],
    [0.00000001403, 1.70344023054, 6283.3196674749],
    [0.00000001082, 0.42998284063, 12303.3115940935],
    [0.00000001021, 4.82243595142, 4562.70481050471],
    [0.00000001086, 3.14202913465, 1751.2957139325],
    [0.00000001153, 3.38794180744, 7211.1596359777],
    [0.00000001277, 3.27189335276, 2699.9786368011],
    [0.0000000093, 4.55598641101, 2811.1652790887],
    [0.00000000918, 0.03623887552, 155.6642169177],
    [0.0000000089, 0.84840834382, 3343.8917275653],
    [0.00000000991, 2.88410008262, 9830.6328314713],
    [0.00000001152, 3.50867300596, 951.9622237341],
    [0.00000000877, 2.64329046587, 10818.3791043993],
    [0.00000001028, 2.84086438787, 3981.73385156551],
    [0.00000000724, 4.91589406941, 553.8132203259],
    [0.00000000813, 1.76324310782, 10022.0983512351],
    [0.00000000728, 4.61545970674, 853.4401992355],
    [0.00000000746, 3.59416377355, 9623.9320941747],
    [0.00000000684, 5.74096167481, 8274.0646845159],
    [0.00000000813, 6.0157566961, 10022.06384393071],
    [0.00000000641, 3.57436678344, 6681.40136058031],
    [0.00000000632, 5.44429272359, 10018.5579792339],
    [0.00000000616, 2.91086112437, 7235.0380737255],
    [0.00000000846, 1.46603022319, 6688.5822178839],
    [0.00000000857, 0.35841204861, 6041.5713845691],
    [0.00000000572, 6.06652679327, 529.44714761109],
    [0.00000000578, 3.67902081482, 6040.5910635009],
    [0.00000000568, 0.98475898207, 15643.9240207933],
    [0.0000000056, 3.79594148168, 397.9051859247],
    [0.00000000661, 3.68465313325, 6894.76776632111],
    [0.00000000538, 0.50329899287, 4690.23601887509],
    [0.00000000701, 2.07056825974, 3178.38960805111],
    [0.00000000689, 5.65192172854, 796.0541893329],
    [0.00000000688, 4.04353453116, 3503.3228803155],
    [0.00000000545, 3.41001382974, 2766.5114458485],
    [0.0000000055, 1.45021906208, 7633.1870771337],
    [0.0000000064, 3.165853498, 6681.5359811859],
    [0.0000000051, 3.26303726541, 3893.93801205869],
    [0.00000000617, 0.99681498656, 3253.5480396435],
    [0.00000000596, 5.12698391726, 3428.16444872311],
    [0.00000000629, 1.64232890349, 6.86972951729],
    [0.00000000603, 1.87080717732, 4292.0870154669],
    [0.00000000548, 5.71337800864, 6680.4883498149],
    [0.00000000444, 2.70322166823, 3915.2010425181],
    [0.00000000411, 6.2789614514, 3980.7535304973],
    [0.0000000056, 4.08717867095, 26725.1432310819],
    [0.00000000399, 4.13396201386, 12964.5445208745],
    [0.00000000383, 1.25733997062, 2700.4713229023],
    [0.00000000409, 3.80977418197, 7064.3652031063],
    [0.00000000499, 4.46670852178, 2914.2580533073],
    [0.00000000408, 1.69107992579, 2648.6986429565],
    [0.00000000494, 1.01711860076, 1039.27042827391],
    [0.00000000367, 1.15983352898, 8270.5415661669],
    [0.00000000379, 1.31139516762, 11081.46302777211],
    [0.00000000354, 4.23224813069, 1194.2031927411],
    [0.00000000403, 0.13228544943, 8031.3360805419],
    [0.00000000449, 3.99464222002, 213.0552779545],
    [0.00000000397, 3.84049099896, 2544.07060239989],
    [0.00000000344, 4.40570415749, 4033.0138454101],
    [0.00000000314, 2.74388586902, 6872.91693699471],
    [0.0000000041, 4.28621405712, 8433.00820229911],
    [0.00000000297, 0.0940495171, 574.10098085129],
    [0.00000000326, 1.34034230009, 10023.06141865111],
    [0.00000000294, 1.26195385099, 5459.6201045617],
    [0.00000000278, 1.24918021097, 11216.5281078075],
    [0.00000000274, 4.25063115139, 10551.7720626775],
    [0.00000000355, 4.3282732538, 8672.21368792411],
    [0.00000000287, 4.60679040146, 3495.78900865049],
    [0.00000000282, 4.55464471058, 13760.8425276909],
    [0.00000000359, 6.00520105343, 3097.64000524229],
    [0.00000000266, 3.6859775072, 10022.1484078857],
    [0.00000000284, 1.46414557972, 5828.2722891311],
    [0.00000000314, 5.08365465116, 16173.6149858879],
    [0.00000000263, 1.47512984004, 9468.51169474051],
    [0.00000000277, 4.29922856475, 3336.8454908673],
    [0.00000000251, 1.08022178481, 2942.21960580809],
    [0.00000000269, 2.34301425928, 2487.1722274643],
    [0.00000000256, 5.52886759635, 5088.3850222833],
    [0.00000000265, 4.09423905022, 10022.01378728011],
    [0.00000000241, 4.64969172321, 2301.8296333929],
    [0.00000000232, 5.34839535146, 13359.1704059337],
    [0.00000000261, 3.53492755311, 1221.6047488379],
    [0.00000000225, 5.21546840346, 1751.7833488995],
    [0.00000000252, 3.11351356709, 1066.7392946735],
    [0.00000000246, 4.94803970472, 10264.80970155691],
    [0.00000000285, 0.15604991648, 12310.42514109431],
    [0.00000000243, 2.47247524273, 9779.3524936089],
    [0.0000000022, 5.34295457148, 8429.4850839501],
    [0.0000000028, 1.23534408406, 5091.90814063229],
    [0.00000000214, 1.14917768049, 2699.49100183409],
    [0.00000000234, 1.82528787325, 6468.1695754451],
    [0.00000000247, 1.05434658596, 213.5429129215],
    [0.00000000265, 1.38035585731, 18984.5364474931],
    [0.00000000206, 5.1035356232, 6836.40143535029],
    [0.00000000198, 2.14333009014, 13362.7107779349],
    [0.00000000199, 0.11264416842, 13362.6762706305],
    [0.00000000267, 0.20812545566, 5614.9731936931],
    [0.000000002, 2.34389696982, 7632.6994421667],
    [0.00000000238, 4.42808531081, 16706.8290693315],
    [0.00000000189, 4.24906121119, 3723.26514143949],
    [0.00000000187, 2.81434210031, 1592.3521961493],
    [0.00000000211, 1.82857292487, 7108.06686175911],
    [0.00000000244, 1.68371543063, 242.4847864905],
    [0.00000000193, 2.86364604815, 9070.3626913323],
    [0.00000000198, 3.69840284408, 191.6920835951],
    [0.00000000172, 3.26900025992, 13171.2452581711],
    [0.00000000196, 0.42643861998, 13207.27312484851],
    [0.00000000234, 3.70618365075, 7234.5504387585],
    [0.00000000177, 0.37345902868, 9639.18456535971],
    [0.00000000168, 0.18332006876, 1052.51220067191],
    [0.0000000017, 1.4245630821, 4379.8828549737],
    [0.00000000222, 5.1047167747, 5642.4420600927],
    [0.00000000157, 6.077941509, 383.1403497067],
    [0.00000000155, 3.9093144046, 12296.1980470927],
    [0.00000000154, 3.04637044996, 10575.6505004253],
    [0.00000000155, 0.75034905139, 16702.81831601549],
    [0.00000000171, 3.35870246354, 3184.9482097821],
    [0.00000000148, 4.16708586457, 10235.3801930209],
    [0.0000000014, 0.21579055276, 6438.2524319421],
    [0.00000000141, 1.84664759575, 10029.1946445837],
    [0.00000000154, 1.16100089333, 2810.6776441217],
    [0.00000000137, 5.90622302168, 1437.41943168211],
    [0.00000000133, 4.90961144014, 8827.6340873583],
    [0.00000000131, 0.25165704659, 3030.01544531491],
    [0.00000000134, 2.50558754072, 2301.34199842589],
    [0.00000000128, 0.82893704653, 9382.18381126891],
    [0.00000000119, 1.05918597755, 5614.48555872609],
    [0.0000000012, 3.55524858904, 3320.0808486909],
    [0.00000000119, 5.71468810799, 3361.6316396757],
    [0.00000000116, 5.87199885875, 3651.6970430517],
    [0.00000000117, 4.28224437586, 6701.8239902819],
    [0.00000000146, 1.21928643824, 3738.51761262449],
    [0.00000000129, 2.3204041913, 6696.72114206811],
    [0.00000000118, 3.47554817815, 149.8070146181],
    [0.00000000107, 3.54962193881, 4407.3517213733],
    [0.00000000114, 3.18671462047, 7322.34627826531],
    [0.00000000105, 1.58662031954, 6666.2161996981],
    [0.00000000108, 4.17304364327, 10575.1628654583],
    [0.00000000115, 2.21982999199, 9168.88471583091],
    [0.0000000013, 1.61147250477, 10973.7995038335],
    [0.00000000101, 2.88371987525, 14158.9915310991],
    [0.00000000102, 2.72041962157, 4562.2171755377],
    [0.00000000099, 4.08432740077, 5621.5991057269],
    [0.00000000101, 0.61635489651, 9778.8648586419],
    [0.00000000115, 6.16350509467, 3148.9203431047],
    [0.00000000131, 5.90042253901, 6661.11335148431],
    [0.00000000134, 1.31032537502, 2913.7704183403],
    [0.00000000113, 2.14345351717, 6519.0020347509],
    [0.00000000096, 5.6933460442, 2700.9589578693],
    [0.00000000094, 4.95566590883, 6816.53375091851],
    [0.00000000097, 0.21546380481, 11371.9485072417],
    [0.00000000118, 3.13572565534, 10213.5293636945],
    [0.00000000088, 4.49196657842, 1835.56843509031],
    [0.00000000096, 0.62767532388, 15114.2330556987],
    [0.00000000119, 5.54166774257, 10177.01386205009],
    [0.00000000096, 1.11981306669, 6684.5041542651],
    [0.00000000117, 3.59287220197, 9225.7830907665],
    [0.00000000095, 5.86251553025, 5486.53402569149],
    [0.00000000088, 1.02951159717, 8030.8484455749],
    [0.00000000085, 1.8408350349, 6151.2900708215],
    [0.00000000089, 5.88609595798, 10177.5014970171],
    [0.00000000081, 0.23842229522, 5244.2930566845],
    [0.00000000081, 5.362521623, 1505.04399160949],
    [0.00000000079, 3.99668001072, 10404.9776298061],
    [0.00000000095, 4.50704283927, 16305.1569475743],
    [0.0000000009, 3.09437543611, 10014.9675505821],
    [0.00000000098, 3.53367325303, 9808.78200214491],
    [0.00000000096, 4.43634405431, 1059.1381127057],
    [0.00000000073, 5.43736834192, 6660.6932753907],
    [0.00000000077, 5.92439560709, 4136.66661603269],
    [0.00000000071, 5.75155209191, 2274.3607669933],
    [0.00000000075, 4.06478068204, 7903.3172372045],
    [0.00000000098, 1.59156329835, 6040.10342853389],
    [0.00000000085, 5.15748985329, 4194.0526259353],
    [0.00000000073, 2.01248478882, 9380.71585523369],
    [0.00000000093, 1.38217187583, 1990.5011995575],
    [0.00000000086, 1.47044925, 20752.4205449919],
    [0.00000000069, 6.09792009314, 1903.6806299847],
    [0.0000000007, 6.273728323, 2388.6502029657],
    [0.00000000069, 3.74116772307, 8962.2115324267],
    [0.00000000066, 6.06493527472, 13517.62628874989],
    [0.00000000069, 4.43286275856, 30065.7556577817],
    [0.00000000079, 4.41786563798, 3337.26581553151],
    [0.00000000079, 4.84899849761, 3344.4466728351],
    [0.00000000064, 3.87843028506, 25287.47998191629],
    [0.00000000065, 1.67365918241, 2631.86644190671],
    [0.00000000065, 5.75101393296, 20199.3387771165],
    [0.00000000061, 0.59227624984, 4032.52621044309],
    [0.00000000062, 3.62324723182, 27035.49639498329],
    [0.00000000062, 2.9989480494, 5641.9544251257],
    [0.00000000063, 6.24532574874, 12936.0953334067],
    [0.00000000084, 3.95654625717, 1903.19299501769],
    [0.00000000071, 4.38296840291, 11770.0975106499],
    [0.00000000072, 0.93455070924, 13119.47728534169],
    [0.00000000063, 4.06602682655, 13362.7608345855],
    [0.00000000061, 0.93007138211, 17411.8081182921],
    [0.0000000006, 0.07444626057, 3205.7911641479],
    [0.00000000058, 6.22909541546, 7255.8134692179],
    [0.0000000008, 0.78227120577, 21795.4579090983],
    [0.00000000064, 5.47349341844, 6768.77687542291],
    [0.00000000063, 5.13193846811, 3340.38586286849],
    [0.00000000064, 0.4568785532, 3914.71340755109],
    [0.00000000056, 1.90007366831, 27434.1330333585],
    [0.00000000057, 2.44461266111, 12721.32828193349],
    [0.00000000058, 2.91190076994, 3475.92132421871],
    [0.00000000066, 0.9330676125, 14127.99895376209],
    [0.00000000055, 1.64400276973, 4846.1440532763],
    [0.00000000061, 1.6474623666, 5989.3110696563],
    [0.00000000056, 5.44862221942, 16699.7828326335],
    [0.00000000063, 3.10372430555, 3340.3513555641],
    [0.00000000054, 4.84864924468, 2786.7992063739],
    [0.00000000059, 4.79379884356, 7063.87756813929],
    [0.00000000052, 4.93425415169, 11128.73226830069],
    [0.00000000067, 3.08005724919, 2233.71743849851],
    [0.00000000051, 4.01654589565, 30376.10882168309],
    [0.0000000005, 5.75439961134, 17924.66688233689],
    [0.0000000005, 5.72861660044, 17925.1545173039],
    [0.00000000049, 1.66917730044, 14422.0754544719],
    [0.0000000005, 1.30948740291, 6594.1604663433],
    [0.00000000065, 3.77067948165, 6107.1238725483],
    [0.0000000005, 4.44963662233, 4049.8460464599],
    [0.00000000049, 2.99008112282, 14584.05445563709],
    [0.00000000056, 1.27489003307, 6702.2440663755],
    [0.00000000051, 6.18955107115, 8432.52056733209],
    [0.0000000006, 2.66632277065, 22743.6531969999],
    [0.0000000005, 2.95116022713, 426.3543733925],
    [0.00000000056, 4.0687516556, 9499.5036794891],
    [0.00000000048, 6.03463544833, 21265.7669440037],
    [0.00000000045, 4.2709132303, 13149.3944288447],
    [0.00000000055, 4.47134992564, 13362.62621397991],
    [0.00000000047, 4.49173897577, 9381.69617630189],
    [0.00000000051, 5.47523455944, 19514.2274125877],
    [0.00000000047, 0.46146406745, 7321.36595719711],
    [0.00000000048, 1.27966315736, 23141.8022004081],
    [0.00000000062, 0.3657394212, 6041.08374960209],
    [0.00000000056, 4.19518698917, 9595.4829067069],
    [0.00000000045, 0.7973629128, 17256.38771885789],
    [0.00000000043, 4.70566458674, 9485.2765854875],
    [0.00000000055, 2.85186159808, 16061.94070863329],
    [0.00000000042, 1.50287163065, 8800.2325312615],
    [0.00000000044, 3.94795993501, 17256.8753538249],
    [0.00000000055, 5.86419756588, 8425.8946552983],
    [0.00000000043, 0.99542400694, 6705.3471086309],
    [0.00000000042, 5.91099352451, 25287.9676168833],
    [0.0000000005, 0.81879571159, 11773.6206289989],
    [0.00000000046, 2.96889198903, 10973.3118688665],
    [0.00000000042, 0.44638157419, 6685.0590995349],
    [0.00000000043, 1.46762912473, 16460.08971204149],
    [0.00000000042, 2.94486773835, 6158.8912527893],
    [0.00000000043, 6.1813453623, 6709.91785835091],
    [0.0000000004, 2.24681835171, 6531.9054737485],
    [0.0000000005, 4.8586081802, 13892.3844893773],
    [0.00000000039, 3.92914400055, 691.9137837433],
    [0.00000000053, 4.53825887195, 3347.90248088131],
    [0.00000000041, 3.84566705233, 12323.17927852529],
    [0.0000000005, 0.75703710335, 18454.8454823985],
    [0.0000000004, 2.10179493054, 13554.1417903943],
    [0.00000000054, 4.70225786858, 3333.8100074853],
    [0.00000000049, 2.91514601795, 6657.59023313531],
    [0.00000000049, 1.48899492537, 11611.1539928667],
    [0.00000000039, 4.33032994271, 5243.80542171749],
    [0.00000000036, 0.22475591221, 19801.1897737083],
    [0.00000000038, 5.19414151817, 8186.7564799761],
    [0.00000000045, 3.23746394812, 5628.7126527277],
    [0.00000000038, 5.80558264651, 11614.6771112157],
    [0.00000000042, 0.0124398623, 6677.8782422313],
    [0.00000000037, 1.66970207361, 8428.9974489831],
    [0.00000000036, 2.54319902644, 17655.0243572331],
    [0.00000000036, 0.2207326172, 19800.7021387413],
    [0.00000000038, 1.75936320775, 22325.1488741929],
    [0.00000000039, 1.95232336514, 3583.0972131903],
    [0.00000000044, 4.50288561893, 25686.1166202915],
    [0.00000000046, 3.04209835581, 4447.9950498681],
    [0.00000000047, 3.41581645664, 8982.5668518255],
    [0.00000000042, 4.56050725497, 6254.38284504009],
    [0.00000000035, 6.07448879945, 18606.25512851669],
    [0.00000000035, 0.19110171429, 5099.50932260011],
    [0.00000000034, 0.27172687467, 5827.78465416409],
    [0.00000000044, 0.60787197203, 7902.8296022375],
    [0.00000000034, 4.27738119614, 15663.79170522509],
    [0.00000000034, 1.49602757441, 28230.4310401749],
    [0.00000000042, 1.70888858696, 13363.67384535091],
    [0.00000000034, 0.52829912831, 3.2793008655],
    [0.00000000038, 3.76470778956, 6843.9353070153],
    [0.00000000033, 5.81667236094, 11243.44202893729],
    [0.00000000033, 0.01403753138, 4778.03185838191],
    [0.00000000035, 3.11315123125, 26084.2656236997],
    [0.00000000042, 1.90806796448, 31571.0434668747],
    [0.00000000034, 1.12608521373, 692.4014187103],
    [0.00000000034, 5.18123693961, 3347.4821562171],
    [0.00000000037, 4.66424749339, 3341.3489302845],
    [0.00000000037, 2.4234079988, 3127.0695137783],
    [0.00000000036, 6.11462616077, 24606.3793707035],
    [0.00000000032, 4.78655245028, 8584.41784841729],
    [0.00000000039, 0.81289176033, 7255.3258342509],
    [0.00000000035, 0.16869923739, 3333.2550622155],
    [0.00000000031, 1.195463978, 10595.9382609507],
    [0.0000000003, 5.08879811241, 20736.0759789091],
    [0.0000000003, 0.63027515429, 10713.75106384269],
    [0.00000000032, 5.53354847657, 1744.1821669317],
    [0.0000000003, 0.55638584024, 3.76693583251],
    [0.00000000036, 1.13991556835, 15113.74542073169],
    [0.0000000003, 4.73542045957, 1222.09238380491],
    [0.00000000031, 0.87259059949, 2575.0631797369],
    [0.00000000031, 5.25117631915, 4106.6493086297],
    [0.00000000029, 1.54929293338, 8827.14645239129],
    [0.0000000003, 0.26033037399, 640.6337898987],
    [0.00000000037, 5.93731996113, 14712.5609339415],
    [0.00000000028, 0.10501454676, 12509.4971425307],
    [0.0000000003, 4.45949277543, 6282.83203250789],
    [0.00000000029, 0.4709557493, 16276.7077601065],
    [0.00000000028, 5.08541958812, 8440.1217492999],
    [0.00000000032, 1.34932157181, 11769.6098756829],
    [0.0000000003, 5.3809974177, 24076.6884056089],
    [0.00000000028, 0.596247496, 15651.03756779411],
    [0.00000000035, 4.67983397003, 19004.4041319249],
    [0.00000000035, 2.79291396629, 14712.07329897449],
    [0.00000000028, 1.28322421957, 3553.66770465429],
    [0.00000000027, 4.82066236084, 17101.4549543907],
    [0.00000000029, 1.21995619161, 27831.79440179969],
    [0.00000000029, 1.21995619161, 27832.2820367667],
    [0.00000000027, 3.25379008238, 31172.8944634665],
    [0.00000000027, 5.09561724929, 3312.4070567155],
    [0.00000000026, 3.78891136297, 7373.62627210991],
    [0.00000000033, 3.24188267043, 5629.2002876947],
    [0.00000000027, 4.17474865828, 3369.3054316511],
    [0.00000000027, 5.73759562221, 15265.64270181689],
    [0.00000000034, 0.09014018186, 28628.5800435831],
    [0.00000000027, 3.31652753395, 19402.55313533309],
    [0.00000000027, 4.95428626263, 29026.7290469913],
    [0.00000000026, 2.52144336597, 16065.82204399129],
    [0.00000000026, 1.6650563976, 21548.7185518083],
    [0.00000000028, 5.18965453043, 3531.81687532789],
    [0.00000000033, 2.07674201664, 3870.0595743109],
    [0.00000000025, 6.034679991, 12722.7962379687],
    [0.00000000024, 0.33206789998, 22747.04689739089],
    [0.00000000025, 3.73666908945, 2957.4720769931],
    [0.00000000032, 1.62301076387, 12302.8239591265],
    [0.00000000023, 4.44526699765, 20597.4877805247],
    [0.00000000026, 5.490250293, 3877.6607562787],
    [0.00000000025, 2.45276955078, 27433.64539839149],
    [0.00000000022, 3.74620147475, 17654.5367222661],
    [0.00000000021, 0.40534339845, 5085.2822285985],
    [0.00000000022, 6.02899389204, 13745.10242153889],
    [0.00000000023, 2.71413139567, 3325.6037729983],
    [0.00000000022, 0.92873709901, 10714.23869880971],
    [0.00000000023, 0.27276624029, 3356.10871536831],
    [0.00000000022, 3.22255788727, 13916.2629271251],
    [0.0000000002, 4.78693375846, 13518.1139237169],
    [0.0000000002, 2.18685576579, 14054.36349054249],
    [0.0000000002, 5.32844841938, 14054.8511255095],
    [0.0000000002, 0.47695326504, 14071.19569159229],
    [0.00000000021, 2.78252415599, 20354.27154158369],
    [0.00000000027, 3.221179189, 23694.8839682835],
    [0.00000000027, 5.28311501931, 11925.03027511709],
    [0.00000000023, 4.68280672465, 1588.82907780029],
    [0.0000000002, 1.50444868935, 2817.7911911225],
    [0.0000000002, 5.49545285602, 29977.95981827489],
    [0.00000000019, 5.62633616092, 27035.9840299503],
    [0.0000000002, 3.61240830848, 9381.2034902007],
    [0.0000000002, 1.71417155656, 1063.14886602171],
    [0.0000000002, 2.07071082637, 36659.6723066415],
    [0.00000000021, 0.27968009759, 10596.4258959177],
    [0.00000000019, 0.78599577864, 3340.43591951909],
    [0.0000000002, 2.37181321274, 34911.6558935745],
    [0.00000000019, 6.18512352666, 23539.9512038163],
    [0.00000000019, 2.54961603658, 40000.2847333413],
    [0.0000000002, 2.0064155666, 2803.56409712089],
    [0.00000000024, 3.64789379261, 9225.29545579949],
    [0.00000000024, 6.09527572891, 30376.5964566501],
    [0.00000000022, 3.6108813502, 537.0483295789],
    [0.00000000019, 4.6537589857, 30774.7454600583],
    [0.00000000024, 0.25109778339, 21946.86755521649],
    [0.0000000002, 0.55978137151, 10787.3865270623],
    [0.00000000018, 0.9381088781, 23938.1002072245],
    [0.00000000018, 0.65703782614, 2487.6598624313],
    [0.00000000018, 3.452419579, 24491.18197509989],
    [0.00000000021, 0.7733686573, 522.8212355773],
    [0.00000000023, 5.60162687963, 37455.9703134579],
    [0.00000000024, 4.31466786422, 3077.77232081051],
    [0.00000000018, 1.24028262416, 18208.1061251085],
    [0.00000000024, 4.24184949882, 4393.1246273717],
    [0.00000000022, 5.20780077851, 13915.77529215809],
    [0.0000000002, 1.19573990945, 3340.3012989135],
    [0.00000000017, 5.14097504316, 22345.0165586247],
    [0.00000000018, 2.2640504866, 3492.7535252685],
    [0.00000000018, 0.71812377845, 3188.95896309811],
    [0.00000000017, 2.31066064344, 17013.65911488389],
    [0.00000000017, 5.73936839879, 28229.94340520789],
    [0.00000000017, 6.13675229471, 8186.2688450091],
    [0.00000000017, 1.27636900458, 5618.5636223449],
    [0.00000000016, 1.17980677135, 29978.4474532419],
    [0.00000000016, 2.20820580655, 10448.6792884589],
    [0.00000000022, 4.95674400481, 3603.9401675561],
    [0.00000000021, 5.05557236085, 26637.34739157509],
    [0.00000000015, 3.72559974712, 11371.4608722747],
    [0.00000000018, 0.65953210534, 18451.3223640495],
    [0.00000000015, 4.3993122173, 23546.9974405143],
    [0.0000000002, 1.62468835541, 33319.0598799417],
    [0.00000000015, 0.9994197616, 17277.6507493173],
    [0.0000000002, 1.01851229845, 20043.43074271529],
];

const Y3: &[Term] = &[
    [0.00001905181, 5.26332442482, 0.2438174835],
    [0.00000638154, 6.15054891881, 6681.46867088311],
    [0.00000315844, 0.68812770928, 10022.0810975829],
    [0.00000167935, 4.34052829824, 3340.36860921629],
    [0.00000088045, 1.14611813288, 13362.6935242827],
    [0.00000034296, 6.12954233244, 3340.8562441833],
    [0.00000019004, 1.53394982779, 16703.3059509825],
    [0.00000017309, 1.96405922769, 3496.2766436175],
    [0.00000017052, 4.14009092313, 3185.43584474911],
    [0.00000012081, 4.55895834821, 6680.98103591609],
    [0.00000008036, 4.44721122484, 3337.33312583431],
    [0.00000008075, 1.32135542935, 3344.3793625323],
    [0.00000003586, 1.89896476323, 20043.9183776823],
    [0.00000003728, 2.73731234443, 3583.5848481573],
    [0.00000003708, 3.37008572755, 3098.1276402093],
    [0.00000002838, 1.86335942445, 6684.9917892321],
    [0.00000002391, 4.50157894761, 6526.04827144891],
    [0.00000002389, 0.55881206863, 3894.4256470257],
    [0.00000002358, 5.53634186088, 2787.2868413409],
    [0.00000002166, 5.72850515937, 155.17658195069],
    [0.00000001411, 4.89547894086, 10021.5934626159],
    [0.000000013, 5.43963179189, 4292.5746504339],
    [0.00000001268, 0.63826775689, 2389.1378379327],
    [0.00000001168, 0.32787695602, 3149.4079780717],
    [0.0000000117, 5.4904554762, 3532.3045102949],
    [0.00000001149, 0.256324262, 4137.1542509997],
    [0.00000001, 0.78268074251, 3339.8759231151],
    [0.00000001053, 5.58094872648, 2544.5582373669],
    [0.00000000909, 4.03516115356, 4690.7236538421],
    [0.00000000997, 5.22732432514, 3341.83656525151],
    [0.00000000874, 2.00558552866, 1990.9888345245],
    [0.00000000773, 2.25965967719, 10025.6042159319],
    [0.000000008, 1.65801132134, 3723.7527764065],
    [0.00000000785, 4.39719518884, 2957.9597119601],
    [0.00000000624, 2.25363881101, 23384.5308043821],
    [0.00000000586, 3.96432388242, 1059.6257476727],
    [0.00000000721, 5.21679562282, 4535.3032544079],
    [0.00000000636, 2.60828365653, 5088.8726572503],
    [0.00000000615, 0.76601087488, 2146.4092339587],
    [0.00000000474, 3.7999501367, 2942.7072407751],
    [0.00000000604, 3.34001877693, 1592.8398311163],
    [0.0000000045, 0.32237574079, 3333.7426971825],
    [0.00000000486, 1.35165895173, 3739.0052475915],
    [0.00000000417, 5.7541617335, 3347.96979118411],
    [0.000000004, 5.17092240158, 4400.2381743725],
    [0.00000000374, 1.81231274497, 6836.8890703173],
    [0.00000000488, 3.09412842261, 6924.1972748571],
    [0.00000000399, 0.86698142534, 6490.0204047715],
    [0.00000000356, 5.90189075488, 6127.8992680407],
    [0.00000000362, 0.57575435741, 5622.08674069391],
    [0.00000000295, 2.11031657729, 7079.61767429131],
    [0.00000000356, 4.8574182773, 9866.66069814871],
    [0.0000000034, 0.71669809587, 7477.7666776995],
    [0.00000000239, 3.60818728854, 6438.7400669091],
    [0.00000000214, 5.6688924619, 6682.44899195131],
    [0.00000000184, 5.24213240799, 13362.2058893157],
    [0.00000000176, 2.3923497863, 5331.6012612243],
    [0.00000000215, 1.01330961394, 5729.7502646325],
    [0.00000000159, 3.74822824989, 4933.4522578161],
    [0.00000000148, 4.78372101689, 6298.57213865991],
    [0.00000000154, 4.07120648646, 6677.9455525341],
    [0.00000000153, 5.60790410015, 7875.91568110771],
    [0.00000000157, 4.45933297186, 796.5418242999],
    [0.00000000172, 2.6181959607, 13366.21664263171],
    [0.00000000143, 0.8249861472, 7235.0380737255],
    [0.00000000155, 5.68177791947, 7740.8506010723],
    [0.00000000116, 3.07839128709, 1194.6908277081],
    [0.00000000106, 1.43807829522, 155.6642169177],
    [0.00000000089, 5.59709996368, 3343.8917275653],
    [0.000000001, 1.30610304994, 9830.6328314713],
    [0.00000000108, 2.60638791189, 10420.23010099111],
    [0.00000000084, 1.11366948198, 10818.3791043993],
    [0.00000000098, 2.60446363513, 26725.1432310819],
    [0.00000000076, 5.59159654622, 4929.92913946711],
    [0.00000000074, 5.71538520874, 7633.1870771337],
    [0.00000000086, 3.58543209453, 1589.3167127673],
    [0.00000000072, 4.63326318414, 5885.1706640667],
    [0.00000000062, 0.11881168827, 5487.0216606585],
    [0.00000000065, 3.44980702826, 10264.80970155691],
    [0.00000000062, 1.52309575501, 7211.1596359777],
    [0.00000000082, 6.15563051504, 6688.5822178839],
    [0.00000000057, 3.09476278894, 12833.00255918811],
    [0.00000000057, 6.25611563425, 9468.51169474051],
    [0.00000000056, 3.56059573252, 6681.45141723091],
    [0.00000000056, 5.59136715053, 6681.4859245353],
    [0.00000000069, 4.15252094724, 796.0541893329],
    [0.00000000065, 0.34610968118, 3870.54720927791],
    [0.00000000067, 2.17750046913, 9492.3901324883],
    [0.00000000051, 4.21953229457, 8274.0646845159],
    [0.00000000048, 5.45844802909, 397.9051859247],
    [0.0000000005, 5.21362719324, 13207.27312484851],
    [0.00000000043, 3.92075403663, 426.8420083595],
    [0.00000000044, 4.30828712757, 8031.3360805419],
    [0.00000000039, 2.78024704625, 1194.2031927411],
    [0.00000000043, 6.06948054666, 10023.06141865111],
    [0.00000000044, 5.65948692732, 5092.3957755993],
    [0.00000000037, 4.89772055096, 8827.6340873583],
    [0.00000000042, 0.13693241822, 10022.0983512351],
    [0.00000000043, 1.88027614352, 3184.9482097821],
    [0.00000000033, 3.97855919031, 1349.62359217529],
    [0.00000000035, 1.3836457582, 9070.3626913323],
    [0.00000000036, 6.07274445742, 11081.46302777211],
    [0.00000000044, 4.83413643654, 12303.3115940935],
    [0.00000000033, 5.60078768464, 15643.9240207933],
    [0.00000000042, 4.38948412695, 10022.06384393071],
    [0.00000000032, 4.09360307102, 10018.5579792339],
    [0.00000000029, 3.12031392752, 3495.78900865049],
    [0.00000000032, 0.83223666105, 6680.4883498149],
    [0.00000000031, 0.33659543405, 7.3573644843],
    [0.00000000036, 1.89292951517, 7064.3652031063],
    [0.00000000026, 5.98285354447, 11216.5281078075],
    [0.00000000035, 6.27114625059, 3336.8454908673],
    [0.00000000025, 1.46525178422, 10575.6505004253],
    [0.00000000033, 2.79365879085, 8672.21368792411],
    [0.00000000026, 1.2860426814, 1592.3521961493],
    [0.00000000027, 5.55280390266, 16702.81831601549],
    [0.00000000025, 3.00868456049, 13760.8425276909],
    [0.00000000027, 4.66856303516, 191.2044486281],
    [0.00000000026, 1.97438831111, 6894.76776632111],
    [0.00000000023, 4.28067595534, 2281.4743139941],
    [0.00000000027, 2.94695290371, 16706.8290693315],
    [0.00000000026, 3.96428963673, 8433.00820229911],
    [0.00000000028, 1.79193447711, 9623.9320941747],
    [0.00000000027, 1.13776019664, 2145.92159899169],
    [0.00000000024, 5.97021720723, 8270.5415661669],
    [0.00000000026, 2.65229643774, 1747.7725955835],
    [0.00000000022, 5.61692474893, 3767.4544350593],
    [0.00000000025, 2.25020572476, 2811.1652790887],
    [0.0000000002, 0.07098508189, 3554.1553396213],
    [0.00000000019, 2.88996373259, 3127.5571487453],
    [0.00000000022, 0.46069753881, 553.32558535889],
    [0.00000000023, 5.33595219972, 951.4745887671],
    [0.00000000019, 0.10196223786, 553.8132203259],
    [0.00000000026, 4.87516844857, 8962.6991673937],
    [0.0000000002, 5.14250346119, 9639.18456535971],
    [0.00000000019, 6.00158821783, 2810.6776441217],
    [0.00000000021, 4.93189731089, 951.9622237341],
    [0.00000000017, 1.68247778914, 13171.2452581711],
    [0.00000000022, 5.95572380889, 3738.51761262449],
    [0.00000000019, 1.64647085293, 6681.40136058031],
    [0.00000000022, 0.08200412214, 10973.7995038335],
    [0.00000000016, 4.51745505904, 4136.66661603269],
    [0.00000000019, 1.23797436286, 6681.5359811859],
    [0.00000000021, 1.35776125147, 1748.2602305505],
    [0.00000000017, 1.0015270122, 382.6527147397],
    [0.0000000002, 1.75396056414, 2280.98667902709],
    [0.00000000022, 3.17699744058, 1350.1112271423],
    [0.00000000016, 5.34701571085, 6254.8704800071],
    [0.00000000016, 2.3658254875, 10551.7720626775],
    [0.00000000015, 1.53277475796, 10177.5014970171],
    [0.00000000014, 3.52302167993, 2914.2580533073],
    [0.00000000014, 6.07892689352, 5459.6201045617],
    [0.00000000019, 6.17607723197, 1990.5011995575],
    [0.00000000014, 0.25864758853, 10029.1946445837],
    [0.00000000013, 2.47039869218, 5614.9731936931],
    [0.00000000015, 1.09462751364, 6674.3551238823],
    [0.00000000013, 6.22971843612, 1066.7392946735],
    [0.00000000016, 2.66082127133, 640.1411037975],
    [0.00000000013, 5.23063056874, 5621.5991057269],
    [0.00000000013, 6.19082803643, 242.97242145751],
    [0.00000000014, 4.959703234, 12310.42514109431],
    [0.00000000013, 5.1333030299, 191.6920835951],
    [0.00000000011, 4.76410993683, 2388.6502029657],
    [0.00000000012, 4.69348384132, 3148.9203431047],
    [0.00000000013, 3.86741890756, 2119.00767786191],
    [0.00000000011, 0.48497464502, 3583.0972131903],
    [0.00000000011, 3.5691232715, 3340.38586286849],
    [0.0000000001, 3.06794437904, 4534.81561944089],
    [0.00000000011, 1.53890583251, 3340.3513555641],
    [0.0000000001, 3.31773666314, 8429.4850839501],
    [0.0000000001, 1.74465995773, 10014.9675505821],
    [0.00000000009, 2.31043926403, 3320.50092478451],
    [0.00000000011, 6.23117374482, 8962.2115324267],
    [0.00000000009, 0.67622157817, 3361.2115635821],
    [0.00000000009, 2.5345773725, 12296.1980470927],
    [0.0000000001, 3.49125725908, 16173.6149858879],
    [0.00000000009, 0.45307177363, 1052.51220067191],
    [0.00000000009, 5.25143266877, 5614.48555872609],
    [0.0000000001, 0.42320665245, 529.9347825781],
    [0.00000000008, 1.34588517648, 3893.93801205869],
    [0.00000000009, 4.25124379767, 3325.6037729983],
    [0.00000000008, 3.39718396453, 2786.7992063739],
    [0.00000000009, 5.01886213751, 3356.10871536831],
    [0.00000000011, 0.14412148132, 242.4847864905],
    [0.00000000009, 6.13794980664, 1751.7833488995],
    [0.00000000007, 1.88989832363, 2957.4720769931],
    [0.00000000008, 6.15723205798, 4292.0870154669],
    [0.00000000007, 1.45796130115, 14158.9915310991],
    [0.0000000001, 5.32959721544, 529.44714761109],
    [0.0000000001, 0.0392363641, 12302.8239591265],
    [0.00000000009, 5.97902157224, 6684.5041542651],
    [0.00000000008, 0.5037075519, 2273.8731320263],
];

const Y4: &[Term] = &[
    [0.00000174339, 2.93381852792, 3340.8562441833],
    [0.00000065332, 6.16516435716, 0.2438174835],
    [0.00000021612, 3.9049778353, 6681.46867088311],
    [0.00000012491, 5.22926339778, 10022.0810975829],
    [0.00000005152, 5.82623510484, 13362.6935242827],
    [0.00000002432, 3.46296610123, 3496.2766436175],
    [0.00000002407, 2.6198897171, 3185.43584474911],
    [0.00000001485, 6.26563422445, 16703.3059509825],
    [0.00000001453, 2.74672685906, 3340.36860921629],
    [0.00000000592, 1.22137870027, 3583.5848481573],
    [0.00000000596, 4.86866829338, 3098.1276402093],
    [0.00000000649, 3.10993649847, 6680.98103591609],
    [0.0000000038, 2.98520597318, 6526.04827144891],
    [0.00000000351, 0.37438431534, 20043.9183776823],
    [0.00000000281, 5.74023871163, 3344.3793625323],
    [0.00000000275, 5.82358825194, 3337.33312583431],
    [0.00000000287, 2.04842024047, 3894.4256470257],
    [0.00000000285, 4.01760045509, 2787.2868413409],
    [0.00000000151, 0.21831233003, 6684.9917892321],
    [0.00000000128, 3.67710811233, 6836.8890703173],
    [0.00000000111, 3.42090983567, 10021.5934626159],
    [0.00000000088, 1.58466318522, 6924.1972748571],
    [0.00000000071, 0.74300955382, 23384.5308043821],
    [0.00000000055, 0.69772957456, 10025.6042159319],
    [0.00000000048, 4.38512823437, 6127.8992680407],
    [0.00000000063, 3.3468829178, 9866.66069814871],
    [0.00000000034, 5.06262173016, 6438.7400669091],
    [0.00000000033, 1.70059643142, 1059.6257476727],
    [0.00000000019, 3.71883012543, 13362.2058893157],
    [0.00000000018, 5.50021563801, 6490.0204047715],
    [0.00000000016, 3.6419883561, 3149.4079780717],
    [0.00000000016, 4.2440966023, 2942.7072407751],
    [0.00000000015, 5.58219475947, 3532.3045102949],
    [0.00000000015, 5.77023095211, 2544.5582373669],
    [0.00000000014, 1.18570988628, 5622.08674069391],
    [0.00000000014, 4.91332403738, 3739.0052475915],
    [0.00000000013, 3.26498430793, 4400.2381743725],
    [0.00000000013, 3.45392588632, 4137.1542509997],
    [0.00000000012, 1.58704936612, 1194.6908277081],
    [0.00000000012, 4.09135686171, 6682.44899195131],
    [0.00000000015, 5.36555803467, 7477.7666776995],
    [0.00000000011, 0.34983006468, 7079.61767429131],
    [0.00000000015, 3.69953477421, 529.9347825781],
    [0.00000000013, 4.15046759496, 10177.5014970171],
    [0.00000000014, 2.27580303219, 7235.0380737255],
    [0.00000000011, 1.94853565727, 10264.80970155691],
    [0.00000000013, 1.09206345437, 13366.21664263171],
    [0.0000000001, 2.95515329817, 796.5418242999],
    [0.0000000001, 0.79995918783, 5331.6012612243],
    [0.00000000012, 5.75066247454, 5729.7502646325],
    [0.00000000011, 1.07729854427, 26725.1432310819],
    [0.00000000008, 3.24165666451, 6298.57213865991],
    [0.00000000008, 2.38038667642, 3340.8734978355],
    [0.00000000008, 0.34961504493, 3340.83899053111],
    [0.00000000007, 5.14772021296, 1990.9888345245],
    [0.00000000009, 5.0799514712, 2280.98667902709],
    [0.00000000007, 4.03741515609, 7875.91568110771],
    [0.00000000008, 2.02200735771, 4933.4522578161],
    [0.00000000007, 3.75129319164, 2389.1378379327],
    [0.00000000009, 0.2541785371, 1592.8398311163],
    [0.00000000007, 0.82767073807, 3339.8759231151],
    [0.00000000007, 2.14189652179, 3341.83656525151],
    [0.00000000007, 4.15524185925, 3343.8917275653],
    [0.00000000006, 5.26975113166, 6151.7777057885],
    [0.00000000007, 0.39533433606, 3184.9482097821],
    [0.00000000007, 2.62352530661, 155.17658195069],
    [0.00000000006, 2.08770398228, 1589.3167127673],
    [0.00000000005, 1.31171511465, 5487.0216606585],
    [0.00000000005, 6.18023058032, 5885.1706640667],
    [0.00000000005, 5.51400581371, 4292.5746504339],
    [0.00000000006, 0.88154703323, 2146.4092339587],
    [0.00000000005, 4.11249699702, 4690.7236538421],
    [0.00000000005, 1.23189383847, 2957.9597119601],
    [0.00000000004, 3.71246158922, 13207.27312484851],
    [0.00000000005, 2.07014421381, 4535.3032544079],
    [0.00000000004, 1.7439264539, 3723.7527764065],
    [0.00000000005, 2.71222704178, 5088.8726572503],
    [0.00000000004, 4.76678794761, 9468.51169474051],
    [0.00000000004, 4.22334394857, 398.3928208917],
    [0.00000000003, 4.44413134438, 3870.54720927791],
    [0.00000000003, 4.24190972006, 7633.1870771337],
];

const Y5: &[Term] = &[
    [0.00000002822, 0.96657189081, 0.2438174835],
    [0.0000000131, 3.05377797611, 3340.8562441833],
    [0.00000000954, 1.98829739864, 6681.46867088311],
    [0.00000000429, 3.31617723817, 10022.0810975829],
    [0.00000000275, 4.95749653129, 3496.2766436175],
    [0.00000000272, 1.093578655, 3185.43584474911],
    [0.00000000241, 4.15990840451, 13362.6935242827],
    [0.00000000262, 1.53308484382, 3340.36860921629],
    [0.00000000092, 4.6789794494, 16703.3059509825],
    [0.00000000076, 5.98548328683, 3583.5848481573],
    [0.00000000077, 0.08639182463, 3098.1276402093],
    [0.00000000049, 1.46758792224, 6526.04827144891],
    [0.00000000032, 1.68955173389, 6680.98103591609],
    [0.00000000026, 5.10726173875, 20043.9183776823],
    [0.00000000027, 3.55496481176, 3894.4256470257],
    [0.00000000026, 2.47271477475, 2787.2868413409],
    [0.00000000013, 5.14425957427, 6836.8890703173],
    [0.00000000013, 0.0692519124, 6924.1972748571],
    [0.00000000006, 1.93462610905, 10021.5934626159],
    [0.00000000007, 6.11562143175, 3337.33312583431],
    [0.00000000007, 3.04667075048, 3344.3793625323],
    [0.00000000005, 2.85975463034, 6127.8992680407],
    [0.00000000007, 1.82394907196, 9866.66069814871],
    [0.00000000006, 4.75654379617, 6684.9917892321],
    [0.00000000005, 5.49442547736, 23384.5308043821],
    [0.00000000004, 0.28345481344, 6438.7400669091],
];

const Z0: &[Term] = &[
    [0.0490120722, 3.76712324286, 3340.6124266998],
    [0.00660669541, 0.0, 0.0],
    [0.00228333904, 4.10544022266, 6681.2248533996],
    [0.00015958402, 4.44367058261, 10021.8372800994],
    [0.00001321976, 4.78186604114, 13362.4497067992],
    [0.0000067966, 5.65109977813, 3337.0893083508],
    [0.00000679219, 5.02527030899, 3344.1355450488],
    [0.0000053114, 3.86748390045, 2281.2304965106],
    [0.00000374993, 4.33338216773, 529.6909650946],
    [0.00000325315, 2.24562508217, 1059.3819301892],
    [0.00000218762, 1.18094849702, 3340.5951730476],
    [0.00000218761, 3.21172012852, 3340.629680352],
    [0.00000152333, 6.0810956613, 6151.533888305],
    [0.00000146631, 5.09927022855, 398.1490034082],
    [0.00000152443, 2.1325453585, 5621.8429232104],
    [0.00000120328, 5.12010663983, 16703.062133499],
    [0.00000126016, 3.67803475473, 796.2980068164],
    [0.00000116766, 4.8691358301, 2942.4634232916],
    [0.00000112925, 5.76548397681, 3738.761430108],
    [0.0000007429, 2.43508234938, 8962.4553499102],
    [0.00000071989, 5.54217679275, 3340.545116397],
    [0.00000068644, 5.54532471548, 6283.0758499914],
    [0.00000071987, 5.13368040597, 3340.6797370026],
    [0.00000063219, 5.36590967098, 6684.7479717486],
    [0.00000075858, 4.51645136094, 3149.1641605882],
    [0.00000063502, 4.1674838574, 1751.539531416],
    [0.00000063828, 5.98786823499, 6677.7017350506],
    [0.00000059355, 0.72879549961, 5884.9268465832],
    [0.00000050332, 1.96033823263, 2810.9214616052],
    [0.00000051292, 2.64769056433, 2914.0142358238],
    [0.00000044615, 5.88956380171, 3532.0606928114],
    [0.00000045001, 2.2994238962, 1589.0728952838],
    [0.00000045526, 2.27415776311, 1194.4470102246],
    [0.00000045098, 4.08200115074, 4136.9104335162],
    [0.00000033148, 2.01609063016, 5486.777843175],
    [0.00000029003, 2.64937555759, 426.598190876],
    [0.00000033968, 0.46851841759, 2544.3144198834],
    [0.00000027697, 5.54319865094, 191.4482661116],
    [0.00000030473, 4.98782051819, 3870.3033917944],
    [0.00000022262, 0.19101027284, 9492.1463150048],
    [0.00000021566, 2.45059201892, 3333.498879699],
    [0.000000199, 4.78493597626, 213.299095438],
    [0.00000019445, 3.36733718353, 5088.6288397668],
    [0.00000022415, 2.8079235337, 3496.032826134],
    [0.00000019109, 0.86825937304, 1592.5960136328],
    [0.00000024101, 2.57371991774, 4399.994356889],
    [0.00000020382, 3.55004736979, 6681.2421070518],
    [0.00000019188, 1.51640815942, 3185.1920272656],
    [0.00000020382, 1.5192757383, 6681.2075997474],
    [0.00000013488, 2.86475891587, 3341.592747768],
    [0.00000013492, 1.5279118483, 3339.6321056316],
    [0.00000011777, 4.79772279974, 3553.9115221378],
    [0.00000012741, 6.05559229749, 7079.3738568078],
    [0.00000011907, 1.65033513222, 6254.6266625236],
    [0.00000011511, 2.75835305381, 12303.06777661],
    [0.00000011629, 5.4583223769, 20043.6745601988],
    [0.0000001178, 4.75307421274, 4690.4798363586],
    [0.00000010587, 6.14125670809, 7.1135470008],
    [0.00000008746, 1.07533372055, 9225.539273283],
    [0.000000093, 5.74426412364, 1990.745017041],
    [0.0000000901, 5.91031650213, 9623.6882766912],
    [0.00000009099, 4.14734627288, 3127.3133312618],
    [0.00000008399, 2.6594277273, 4535.0594369244],
    [0.00000009575, 0.26669816734, 10213.285546211],
    [0.00000011208, 2.64763421097, 8432.7643848156],
    [0.00000008425, 5.67806346712, 6467.9257579616],
    [0.00000007879, 6.16301318418, 4292.3308329504],
    [0.00000006986, 1.31599425886, 3894.1818295422],
    [0.00000007013, 4.83160093113, 6489.776587288],
    [0.00000006707, 5.47201048198, 6681.2921637024],
    [0.00000008732, 5.94456391651, 5092.1519581158],
    [0.00000006427, 6.10941025846, 4562.4609930212],
    [0.00000008234, 3.68630710748, 2700.7151403858],
    [0.00000007214, 1.11647593098, 3319.8370312074],
    [0.00000006128, 4.51741845562, 1221.8485663214],
    [0.00000006627, 5.70488581385, 10025.3603984484],
    [0.00000006712, 0.04223488375, 10018.3141617504],
    [0.00000007157, 3.27593626835, 3361.3878221922],
    [0.00000005667, 1.8457232492, 2957.7158944766],
    [0.00000006707, 5.88050686882, 6681.1575430968],
    [0.00000004916, 2.93046960145, 2787.0430238574],
    [0.00000004722, 2.41041908083, 3344.2028553516],
    [0.0000000465, 1.71276888306, 639.897286314],
    [0.00000004742, 1.97920373919, 3337.021998048],
    [0.00000004597, 4.41002877977, 7477.522860216],
    [0.00000005433, 4.33760555117, 2388.8940204492],
    [0.00000005641, 2.4352733124, 2118.7638603784],
    [0.00000004363, 2.24320799714, 11773.3768115154],
    [0.00000004127, 2.04411881734, 2146.1654164752],
    [0.00000003613, 3.61081984797, 8429.2412664666],
    [0.00000003478, 2.64660968975, 4929.6853219836],
    [0.00000003714, 1.76418965622, 382.8965322232],
    [0.00000003331, 6.17753431621, 7210.9158184942],
    [0.0000000358, 3.90470994536, 7903.073419721],
    [0.00000003111, 2.03406809335, 155.4203994342],
    [0.00000003351, 0.47359753009, 3475.6775067352],
    [0.00000003025, 1.91083270977, 9595.2390892234],
    [0.00000003493, 2.25666784516, 3723.508958923],
    [0.00000003509, 3.91758478184, 3205.5473466644],
    [0.00000003007, 0.8124734182, 2274.1169495098],
    [0.00000002982, 3.68257004005, 2288.3440435114],
    [0.00000002567, 4.96092533051, 8031.0922630584],
    [0.00000002649, 2.98742483865, 3767.2106175758],
    [0.00000002322, 1.23249592342, 4933.2084403326],
    [0.00000002733, 0.51395284395, 12832.7587417046],
    [0.00000002136, 3.8884222335, 10021.8545337516],
    [0.00000002136, 1.857650602, 10021.8200264472],
    [0.00000002772, 2.43968968772, 8827.3902698748],
    [0.00000002162, 3.01828376513, 6041.3275670856],
    [0.00000002091, 3.80489059877, 6872.6731195112],
    [0.00000002233, 2.94758000961, 7740.6067835888],
    [0.00000002614, 4.45694073527, 6674.1113063988],
    [0.0000000193, 5.30759100687, 1066.49547719],
    [0.00000002513, 0.10458597053, 3583.3410306738],
    [0.00000002104, 2.45809927011, 1052.2683831884],
    [0.00000001861, 4.13522134185, 1349.8674096588],
    [0.00000001728, 2.95584201533, 12168.0026965746],
    [0.0000000184, 0.20978853293, 4032.7700279266],
    [0.00000001669, 5.50497155791, 951.7184062506],
    [0.00000001911, 2.94107630035, 1748.016413067],
    [0.00000001442, 1.8773123749, 3077.528503327],
    [0.00000001589, 1.736012972, 3369.0616141676],
    [0.00000001379, 0.09013023527, 10419.9862835076],
    [0.00000001392, 0.27504136647, 3325.3599555148],
    [0.0000000158, 4.486651763, 3.523118349],
    [0.00000001766, 1.85661467458, 6525.8044539654],
    [0.00000001292, 2.51829136056, 3603.6963500726],
    [0.00000001297, 5.48481699939, 11371.7046897582],
    [0.00000001613, 0.62341029242, 553.5694028424],
    [0.00000001384, 4.11719633248, 3355.8648978848],
    [0.00000001261, 1.86730474733, 6680.2445323314],
    [0.0000000161, 2.65671079949, 3312.163239232],
    [0.00000001274, 0.55350948232, 3191.0492295652],
    [0.00000001704, 4.50757815133, 3097.88382272579],
    [0.0000000146, 0.04101454115, 7632.9432596502],
    [0.00000001242, 5.75816506092, 149.5631971346],
    [0.0000000123, 1.1094815434, 536.8045120954],
    [0.00000001216, 2.98306649362, 6836.6452528338],
    [0.00000001161, 4.60505013406, 1648.4467571974],
    [0.00000001579, 3.09053337023, 15643.6802033098],
    [0.00000001118, 6.05429252683, 9808.5381846614],
    [0.00000001376, 0.81116680514, 3503.079062832],
    [0.00000001101, 4.62263227757, 522.5774180938],
    [0.0000000132, 3.23812050004, 3347.7259737006],
    [0.00000001419, 0.32932000507, 3264.3463554242],
    [0.00000001103, 5.79565205719, 6894.5239488376],
    [0.00000001257, 3.20326473314, 6682.2051744678],
    [0.00000000968, 4.43650051215, 103.0927742186],
    [0.00000001004, 4.71380449727, 2487.4160449478],
    [0.00000001014, 0.55883970461, 10973.55568635],
    [0.0000000095, 2.98201757904, 3178.1457905676],
    [0.00000000958, 1.45300862079, 12566.1516999828],
    [0.00000000964, 5.98684645223, 242.728603974],
    [0.00000000925, 5.46131905325, 5614.7293762096],
    [0.00000000935, 4.94933845312, 1758.6530784168],
    [0.00000001171, 5.79646129252, 23384.2869868986],
    [0.00000000969, 2.65689194156, 2648.454825473],
    [0.00000000853, 4.81086337808, 15110.4661198662],
    [0.00000000901, 5.6792882339, 2921.1277828246],
    [0.00000001125, 6.27341969245, 12964.300703391],
    [0.00000000844, 2.97906384874, 7875.6718636242],
    [0.00000000811, 0.19379046862, 3346.1353510072],
    [0.00000000812, 4.19639785587, 3335.0895023924],
    [0.00000000774, 1.38696439205, 7234.794256242],
    [0.00000000761, 1.99221081181, 26087.9031415742],
    [0.00000000742, 0.37908087243, 13358.9265884502],
    [0.00000000732, 5.16784948008, 9830.3890139878],
    [0.00000000946, 1.88936722079, 5628.9564702112],
    [0.0000000082, 4.37824637524, 7373.3824546264],
    [0.00000000671, 5.25224406605, 76.2660712756],
    [0.00000000785, 4.59990880607, 6438.4962494256],
    [0.00000000668, 3.61130377946, 6702.000248892],
    [0.00000000655, 2.60002275981, 11243.6858464208],
    [0.0000000076, 3.03501058836, 3360.96774609859],
    [0.00000000764, 4.37581912554, 11769.8536931664],
    [0.00000000704, 5.80908299008, 10021.9045904022],
    [0.0000000084, 6.11799044851, 5331.3574437408],
    [0.00000000641, 1.73269627789, 1692.1656695024],
    [0.00000000629, 1.09880202633, 14314.1681130498],
    [0.00000000704, 6.21757937692, 10021.7699697966],
    [0.00000000646, 3.01919436853, 9381.9399937854],
    [0.00000000612, 3.40750819704, 10713.9948813262],
    [0.00000000732, 6.04237219046, 13365.9728251482],
    [0.00000000771, 2.47252701375, 15113.9892382152],
    [0.00000000621, 5.85690842904, 3351.2490920496],
    [0.00000000767, 1.35441792357, 3320.257107301],
    [0.00000000586, 0.79051565116, 853.196381752],
    [0.00000000692, 1.46718257115, 6660.4494579072],
    [0.00000000669, 0.51352618116, 7064.1213856228],
    [0.00000000528, 3.12611933096, 74.7815985673],
    [0.000000006, 5.04547651146, 692.1576012268],
    [0.0000000063, 1.58386830258, 1581.959348283],
    [0.00000000623, 4.81491846507, 3329.97576135],
    [0.00000000661, 2.79286199869, 2906.900688823],
    [0.0000000057, 4.61307898923, 3074.005384978],
    [0.00000000524, 6.05770135572, 3607.2194684216],
    [0.00000000516, 2.43629649577, 13916.0191096416],
    [0.00000000507, 2.02939502894, 3333.5661900018],
    [0.00000000605, 1.93804011864, 10575.4066829418],
    [0.00000000488, 4.67812564849, 5729.506447149],
    [0.00000000465, 5.5622476658, 8955.3418029094],
    [0.00000000467, 3.02812406788, 6144.4203413042],
    [0.00000000524, 2.17529898104, 6298.3283211764],
    [0.00000000449, 4.27905913954, 6546.1597733642],
    [0.00000000442, 2.21279250958, 3347.6586633978],
    [0.00000000442, 0.35835774849, 18052.9295431578],
    [0.00000000452, 4.74868579573, 5828.0284716476],
    [0.00000000444, 2.31126753824, 6677.6344247478],
    [0.00000000454, 5.96502230469, 419.4846438752],
    [0.00000000457, 2.7648217207, 5459.3762870782],
    [0.00000000452, 2.18667537557, 12935.8515159232],
    [0.0000000044, 2.2802455372, 8969.568896911],
    [0.00000000439, 3.26823913184, 6127.6554505572],
    [0.00000000417, 2.62418009712, 433.7117378768],
    [0.0000000045, 4.97549718782, 6531.661656265],
    [0.00000000467, 5.81074791371, 6158.6474353058],
    [0.0000000043, 4.78793443738, 3863.1898447936],
    [0.00000000409, 1.99836071636, 3980.5097130138],
    [0.00000000399, 4.74255258433, 10818.1352869158],
    [0.00000000453, 6.26634249241, 14712.317116458],
    [0.00000000437, 2.74634913436, 6684.8152820514],
    [0.000000004, 2.77865299135, 4989.0591838972],
    [0.00000000506, 1.18461823734, 1744.4259844152],
    [0.00000000403, 5.36937826882, 1596.1864422846],
    [0.0000000038, 4.9781884912, 10014.7237330986],
    [0.00000000371, 3.33405966002, 10177.2576795336],
    [0.00000000361, 5.24088703687, 2178.137722292],
    [0.000000004, 1.62063267593, 14584.2982731206],
    [0.00000000403, 1.82423390219, 3399.9862886134],
    [0.0000000041, 4.54392931383, 3344.4937620578],
    [0.00000000418, 4.88395861492, 3443.7052009184],
    [0.00000000341, 3.76526341028, 6688.3384004004],
    [0.00000000387, 2.20624213901, 3281.2385647862],
    [0.00000000328, 1.6070657338, 3546.797975137],
    [0.00000000346, 5.93876607715, 3364.4908644476],
    [0.00000000427, 0.42766619939, 10551.528245194],
    [0.00000000333, 2.9739119878, 17256.6315363414],
    [0.00000000351, 0.89374033083, 16173.3711684044],
    [0.00000000387, 5.50555914948, 3973.396166013],
    [0.0000000041, 6.13790219128, 3336.7310913418],
    [0.00000000349, 4.74282066857, 3316.733988952],
    [0.00000000366, 0.54436256149, 110.2063212194],
    [0.00000000284, 2.49529211057, 6784.3176276182],
    [0.00000000338, 3.01411006339, 8270.2977486834],
    [0.00000000279, 0.15295518242, 135.0650800354],
    [0.0000000029, 4.30595018325, 16858.4825329332],
    [0.00000000277, 3.21266616465, 8329.671610597],
    [0.00000000303, 4.39325865345, 2818.035008606],
    [0.00000000302, 5.76020823903, 2384.3232707292],
    [0.0000000036, 0.81576341528, 6816.289933435],
    [0.00000000287, 5.89677690833, 3340.19235060619],
    [0.000000003, 3.61030466166, 3304.5845600224],
    [0.00000000264, 5.4585926658, 6604.958782124],
    [0.0000000033, 3.81421832191, 13517.8701062334],
    [0.00000000287, 4.7850373588, 3341.0325027934],
    [0.00000000343, 1.02525479822, 3230.4061054804],
    [0.00000000246, 2.64795288862, 3304.0070613956],
    [0.0000000031, 1.76905174573, 10404.7338123226],
    [0.00000000241, 3.33235757149, 11081.2192102886],
    [0.00000000245, 1.00254307216, 3209.0704650134],
    [0.00000000295, 0.7885615813, 3376.6402933772],
    [0.00000000247, 4.74687572675, 9779.1086761254],
    [0.00000000241, 1.74832761256, 3377.217792004],
    [0.00000000264, 1.82146900201, 17654.7805397496],
    [0.00000000274, 2.60650323538, 3657.0042963564],
    [0.00000000238, 0.43806562773, 6923.9534573736],
    [0.00000000227, 2.88048108848, 3415.3940252671],
    [0.000000003, 0.70241789966, 3134.4268782626],
    [0.00000000237, 2.19737291235, 13362.432453147],
    [0.0000000022, 1.4383620968, 6606.4432548323],
    [0.00000000222, 3.39627559384, 3472.1543883862],
    [0.00000000217, 2.18530503085, 20995.3929664494],
    [0.00000000254, 2.93819031378, 5085.038411115],
    [0.00000000236, 4.23042638023, 13362.4669604514],
    [0.00000000242, 0.41755696147, 1861.7458526354],
    [0.00000000285, 0.10171887281, 17085.9586657222],
    [0.00000000218, 0.33151885058, 16304.9131300908],
    [0.00000000215, 5.26457047836, 1375.7737998458],
    [0.00000000207, 3.60591178333, 7107.8230442756],
    [0.00000000196, 3.34505476799, 8439.8779318164],
    [0.00000000192, 5.08475415071, 13119.72110282519],
    [0.00000000269, 0.19698472851, 3024.2205570432],
    [0.00000000194, 4.52507414451, 220.4126424388],
    [0.00000000186, 1.75940958561, 2221.856634597],
    [0.00000000194, 3.41534671398, 18984.2926300096],
    [0.00000000208, 3.02738720944, 3511.285297319],
    [0.00000000204, 6.00463791835, 162.4666361322],
    [0.00000000183, 3.62962279261, 9168.6408983474],
    [0.00000000175, 4.04165128738, 3760.097070575],
    [0.00000000174, 4.51117927233, 23539.7073863328],
    [0.00000000193, 5.88968824988, 2803.8079146044],
    [0.0000000019, 6.176374849, 13745.3462390224],
    [0.00000000208, 3.34809361979, 3341.0423098265],
    [0.00000000198, 0.9731134796, 3265.8308281325],
    [0.00000000205, 4.20157952693, 6843.6914895318],
    [0.00000000222, 1.37049171707, 3169.9395560806],
    [0.00000000183, 2.1904167858, 9866.4168806652],
    [0.00000000225, 0.3245021951, 13149.1506113612],
    [0.00000000211, 4.38136759956, 640.8776073822],
    [0.000000002, 3.0011278137, 1162.4747044078],
    [0.00000000208, 6.18496348629, 1478.8665740644],
    [0.00000000173, 3.90520749444, 5099.2655051166],
    [0.00000000175, 0.38064797785, 956.2891559706],
    [0.00000000158, 2.98574812713, 13524.9163429314],
    [0.0000000017, 3.37406232659, 15508.6151232744],
    [0.00000000184, 2.0944984533, 949.1756089698],
    [0.00000000171, 4.75570011379, 6261.7402095244],
    [0.00000000188, 5.56241899175, 16460.33352952499],
    [0.00000000205, 5.01940138208, 1118.7557921028],
    [0.00000000156, 3.68058177082, 13553.8979729108],
    [0.0000000017, 2.00050957424, 224.3447957019],
    [0.00000000208, 1.0457695039, 3340.1825435731],
    [0.00000000156, 4.90620162208, 20199.094959633],
    [0.00000000174, 5.5877831813, 2766.267628365],
    [0.00000000169, 3.71127165203, 10184.3039162316],
    [0.00000000171, 3.60600294119, 20597.2439630412],
    [0.0000000014, 1.54110979029, 2111.6503133776],
    [0.00000000145, 6.1716114054, 19800.9459562248],
    [0.00000000156, 0.43599559375, 4459.3682188026],
    [0.00000000143, 0.19892133285, 10235.1363755374],
    [0.00000000184, 1.58017928752, 8273.8208670324],
    [0.00000000133, 2.86759235449, 20618.0193585336],
    [0.00000000151, 1.59809012076, 13892.1406718938],
    [0.00000000133, 6.14918807002, 17277.4069318338],
    [0.00000000167, 0.94707767481, 3274.1250177854],
    [0.00000000143, 4.48621138334, 632.7837393132],
    [0.00000000126, 4.54286582844, 3914.9572250346],
    [0.00000000145, 2.88581037055, 4392.8808098882],
    [0.00000000165, 5.44939669734, 1228.9621133222],
    [0.00000000124, 2.73197400851, 3407.0998356142],
    [0.00000000145, 5.65866985683, 4407.1079038898],
    [0.00000000164, 2.20529053904, 38.1330356378],
    [0.00000000158, 1.72206104768, 3296.8935143948],
    [0.00000000116, 0.0290460957, 26482.1708096244],
    [0.00000000156, 1.25691413032, 3384.3313390048],
    [0.00000000117, 4.96153079924, 3981.490034082],
    [0.00000000154, 2.172550318, 1964.838626854],
    [0.00000000113, 3.06854044437, 206.1855484372],
    [0.00000000117, 2.13763640035, 29424.634232916],
    [0.00000000129, 2.20198223551, 3450.8187479192],
    [0.00000000115, 5.2485095315, 3237.5196524812],
    [0.00000000112, 6.26358102825, 2125.8774073792],
    [0.00000000112, 4.67861613977, 2807.3983432562],
    [0.00000000115, 0.38603739544, 12721.572099417],
    [0.00000000113, 1.36558076768, 6709.6740408674],
    [0.00000000144, 0.22567806033, 263.0839233728],
    [0.00000000109, 5.27187307952, 5518.7501489918],
    [0.00000000125, 2.20397088123, 30220.9322397324],
    [0.00000000108, 6.20219802547, 6665.9723822146],
    [0.00000000127, 2.68652319514, 7321.1221397136],
    [0.0000000011, 0.18586807658, 29822.7832363242],
    [0.00000000107, 0.50226646577, 22743.4093795164],
    [0.00000000107, 3.59856046864, 5989.0672521728],
    [0.00000000106, 5.69966166034, 33561.5446664322],
    [0.00000000105, 3.9737597608, 9380.9596727172],
];

const Z1: &[Term] = &[
    [0.00533220761, 5.37045188878, 3340.6124266998],
    [0.00032258788, PI, 0.0],
    [0.00007302119, 5.48197049223, 6681.2248533996],
    [0.00000777092, 3.20452658315, 10021.8372800994],
    [0.00000166695, 3.41487685068, 13362.4497067992],
    [0.00000156044, 0.77594576545, 3337.0893083508],
    [0.00000052883, 2.55566894166, 2281.2304965106],
    [0.00000042031, 6.05247110697, 529.6909650946],
    [0.00000031177, 3.47957118843, 5621.8429232104],
    [0.00000024541, 3.7225052335, 16703.062133499],
    [0.00000025907, 4.79004064527, 3344.1355450488],
    [0.000000238, 2.78437789651, 3340.5951730476],
    [0.00000017724, 0.33832536017, 398.1490034082],
    [0.00000024098, 0.26741008281, 2942.4634232916],
    [0.000000238, 4.81514959722, 3340.629680352],
    [0.00000017059, 1.42825204765, 6151.533888305],
    [0.00000019956, 1.69346504279, 3532.0606928114],
    [0.00000015117, 1.79886272527, 2544.3144198834],
    [0.00000013619, 6.03064463759, 2810.9214616052],
    [0.00000013681, 4.34937268643, 3496.032826134],
    [0.0000000998, 0.9727658415, 6677.7017350506],
    [0.00000011657, 2.25529456107, 5884.9268465832],
    [0.00000009888, 4.14137402777, 1059.3819301892],
    [0.00000008253, 3.93247597797, 8962.4553499102],
    [0.00000008936, 0.03236493895, 3185.1920272656],
    [0.00000007843, 0.86090694397, 3340.545116397],
    [0.00000007463, 0.85796039982, 6283.0758499914],
    [0.00000007838, 0.45374819664, 3340.6797370026],
    [0.00000006532, 3.46604878226, 5092.1519581158],
    [0.00000007, 2.91161281175, 1751.539531416],
    [0.00000006215, 4.29108610819, 6684.7479717486],
    [0.00000005486, 3.7312753768, 5486.777843175],
    [0.00000004744, 3.11292686055, 3339.6321056316],
    [0.00000004768, 1.11702153656, 2914.0142358238],
    [0.00000003697, 5.07727152864, 5088.6288397668],
    [0.00000003696, 5.17619762565, 796.2980068164],
    [0.00000004194, 1.30289365634, 3738.761430108],
    [0.00000003104, 2.90264842875, 3894.1818295422],
    [0.00000003078, 3.23232337445, 2146.1654164752],
    [0.0000000306, 1.47684271283, 3870.3033917944],
    [0.00000003279, 4.04708484838, 20043.6745601988],
    [0.00000002645, 6.20328748216, 213.299095438],
    [0.00000002591, 5.67618677721, 1592.5960136328],
    [0.00000002686, 2.27518970275, 3149.1641605882],
    [0.00000003065, 5.50490756275, 3127.3133312618],
    [0.00000002618, 1.49434953131, 4292.3308329504],
    [0.00000002929, 0.13035493149, 4690.4798363586],
    [0.00000002433, 0.83360306332, 1194.4470102246],
    [0.00000001893, 1.44037290348, 2787.0430238574],
    [0.00000002056, 2.69646867769, 4136.9104335162],
    [0.00000001896, 4.12121426717, 3723.508958923],
    [0.0000000181, 1.25670128975, 3341.592747768],
    [0.00000001948, 4.26663375622, 1990.745017041],
    [0.00000002146, 2.79934106364, 6254.6266625236],
    [0.00000001699, 5.88106551599, 3097.88382272579],
    [0.00000001644, 2.85985547231, 2388.8940204492],
    [0.0000000121, 3.52826008702, 155.4203994342],
    [0.00000001638, 4.23138744183, 8432.7643848156],
    [0.00000001151, 4.07168420281, 7.1135470008],
    [0.00000001111, 0.33771745106, 2957.7158944766],
    [0.00000001375, 4.9039005734, 3583.3410306738],
    [0.00000001075, 2.89446881499, 1589.0728952838],
    [0.00000000994, 1.22724079631, 4535.0594369244],
    [0.00000000973, 2.54415383282, 9225.539273283],
    [0.00000001053, 2.17507915001, 2288.3440435114],
    [0.00000001234, 1.07118451631, 4399.994356889],
    [0.00000000937, 0.33440700581, 6674.1113063988],
    [0.00000000964, 0.92522802179, 6467.9257579616],
    [0.0000000118, 1.46657018316, 3333.498879699],
    [0.00000001149, 4.46586649175, 10025.3603984484],
    [0.00000000787, 4.21744543042, 426.598190876],
    [0.00000000734, 1.59169132873, 9492.1463150048],
    [0.00000000744, 3.21417897895, 1221.8485663214],
    [0.0000000085, 1.84579754127, 10213.285546211],
    [0.0000000096, 0.37818281067, 6525.8044539654],
    [0.00000000748, 3.14653223844, 6489.776587288],
    [0.00000000939, 3.74411147052, 4562.4609930212],
    [0.00000000816, 4.88051263913, 3361.3878221922],
    [0.0000000067, 1.82692939869, 3325.3599555148],
    [0.00000000787, 4.6207386104, 1748.016413067],
    [0.00000000746, 2.72473273276, 3319.8370312074],
    [0.00000000615, 3.00346220351, 7477.522860216],
    [0.00000000612, 0.94873589103, 10018.3141617504],
    [0.00000000726, 4.21670769259, 1052.2683831884],
    [0.00000000562, 2.51075037144, 2274.1169495098],
    [0.00000000676, 5.46592420299, 3205.5473466644],
    [0.00000000652, 4.92680960161, 6681.2421070518],
    [0.0000000058, 1.95948510974, 3553.9115221378],
    [0.0000000062, 4.53706892447, 3360.96774609859],
    [0.00000000568, 4.48134936442, 6836.6452528338],
    [0.00000000516, 3.66568073238, 1066.49547719],
    [0.00000000652, 2.89603807936, 6681.2075997474],
    [0.00000000528, 3.91265871028, 6041.3275670856],
    [0.0000000059, 2.14286730936, 553.5694028424],
    [0.00000000481, 3.65133581406, 3337.021998048],
    [0.00000000486, 0.035398009, 522.5774180938],
    [0.00000000479, 4.08237627559, 3344.2028553516],
    [0.00000000491, 3.26656040639, 382.8965322232],
    [0.00000000599, 3.48114565787, 191.4482661116],
    [0.0000000046, 3.60938831179, 11773.3768115154],
    [0.00000000484, 4.53788344821, 7079.3738568078],
    [0.00000000457, 4.49932663564, 242.728603974],
    [0.0000000041, 3.93129679071, 12303.06777661],
    [0.00000000432, 0.62719640964, 5614.7293762096],
    [0.00000000415, 5.7871539747, 1349.8674096588],
    [0.00000000449, 6.07546222965, 4933.2084403326],
    [0.00000000414, 0.76551632852, 951.7184062506],
    [0.00000000477, 6.15909631316, 3320.257107301],
    [0.00000000421, 4.37788398088, 23384.2869868986],
    [0.00000000418, 6.18476783317, 6438.4962494256],
    [0.00000000482, 3.91728938067, 8827.3902698748],
    [0.00000000365, 2.58064909826, 3355.8648978848],
    [0.00000000333, 3.42873039925, 6680.2445323314],
    [0.0000000033, 3.24081124683, 9595.2390892234],
    [0.00000000317, 1.00610206365, 9623.6882766912],
    [0.00000000365, 5.85846191272, 639.897286314],
    [0.00000000293, 1.52957859377, 7740.6067835888],
    [0.00000000331, 0.22404636497, 2700.7151403858],
    [0.00000000255, 3.99432797748, 2921.1277828246],
    [0.00000000304, 4.22948972595, 3312.163239232],
    [0.00000000328, 2.40258646743, 2118.7638603784],
    [0.00000000236, 3.4002072705, 1758.6530784168],
    [0.00000000251, 5.66519309695, 536.8045120954],
    [0.00000000237, 1.24529852403, 3364.4908644476],
    [0.00000000214, 0.56442646442, 6681.2921637024],
    [0.00000000245, 1.46405275777, 4929.6853219836],
    [0.00000000261, 1.37575395801, 3347.7259737006],
    [0.00000000277, 2.4571453847, 3503.079062832],
    [0.00000000257, 4.6398962554, 5331.3574437408],
    [0.00000000216, 1.78813616163, 6127.6554505572],
    [0.00000000266, 1.65519778241, 6682.2051744678],
    [0.00000000204, 4.87400049907, 6144.4203413042],
    [0.00000000214, 0.97289996058, 6681.1575430968],
    [0.00000000193, 2.86664857796, 7210.9158184942],
    [0.00000000189, 3.19369904946, 5729.506447149],
    [0.00000000185, 4.60022172333, 12168.0026965746],
    [0.00000000184, 4.90073216006, 10419.9862835076],
    [0.00000000196, 2.02607662846, 3346.1353510072],
    [0.00000000191, 4.71901518542, 13365.9728251482],
    [0.00000000174, 1.31405252638, 7064.1213856228],
    [0.00000000167, 0.99843143165, 8955.3418029094],
    [0.0000000017, 1.48043717586, 7875.6718636242],
    [0.00000000197, 3.29154622691, 17654.7805397496],
    [0.0000000017, 2.88198960502, 6872.6731195112],
    [0.00000000157, 2.56733171598, 3178.1457905676],
    [0.00000000148, 0.86328445077, 2699.7348193176],
    [0.00000000152, 5.23944955455, 6923.9534573736],
    [0.00000000171, 3.14240135508, 3316.733988952],
    [0.00000000174, 1.48894564475, 3767.2106175758],
    [0.00000000144, 3.57581507564, 9830.3890139878],
    [0.0000000014, 3.50121767027, 3077.528503327],
    [0.00000000147, 0.72898424375, 2487.4160449478],
    [0.00000000165, 1.35817246585, 3.523118349],
    [0.00000000171, 5.87779648432, 11769.8536931664],
    [0.00000000146, 5.13010621713, 3304.5845600224],
    [0.00000000126, 4.1444958521, 3603.6963500726],
    [0.0000000015, 0.67031927264, 6298.3283211764],
    [0.00000000169, 3.37958950467, 1581.959348283],
    [0.00000000132, 1.36026397982, 419.4846438752],
    [0.00000000137, 3.91255974972, 7903.073419721],
    [0.00000000119, 1.1158886636, 433.7117378768],
    [0.00000000116, 4.20840451833, 9381.9399937854],
    [0.00000000132, 5.61925791338, 12832.7587417046],
    [0.00000000119, 3.29620748546, 10818.1352869158],
    [0.00000000139, 1.48720938048, 14712.317116458],
    [0.00000000121, 3.78071153759, 1596.1864422846],
    [0.00000000116, 0.71600721713, 9866.4168806652],
    [0.00000000107, 2.41569477061, 2648.454825473],
    [0.00000000141, 1.40883592065, 3336.7310913418],
    [0.00000000124, 5.27111992916, 853.196381752],
    [0.0000000012, 0.24314469015, 3863.1898447936],
    [0.00000000106, 1.89681319705, 3475.6775067352],
    [0.00000000104, 0.61683878316, 10021.8200264472],
    [0.00000000099, 2.78700157494, 10575.4066829418],
    [0.000000001, 1.75288902946, 8429.2412664666],
    [0.00000000105, 3.95535664942, 11243.6858464208],
    [0.00000000104, 2.64763687393, 10021.8545337516],
    [0.00000000097, 3.70870547299, 4032.7700279266],
    [0.00000000099, 0.46508871986, 149.5631971346],
    [0.00000000094, 0.92726193663, 7632.9432596502],
    [0.00000000098, 1.72351303556, 18052.9295431578],
    [0.00000000108, 2.41308938131, 7234.794256242],
    [0.00000000093, 2.1244838174, 6688.3384004004],
    [0.00000000106, 4.22500281625, 6158.6474353058],
    [0.00000000109, 3.05520401747, 640.8776073822],
    [0.0000000011, 0.14136188594, 5628.9564702112],
    [0.00000000112, 3.90540165638, 6894.5239488376],
    [0.00000000077, 3.42693027158, 1744.4259844152],
    [0.00000000083, 0.48188810071, 8969.568896911],
    [0.00000000078, 3.48895806928, 7373.3824546264],
    [0.00000000098, 1.09842815785, 5085.038411115],
    [0.00000000087, 5.57913927474, 3376.6402933772],
    [0.00000000071, 0.19809257252, 3980.5097130138],
    [0.00000000072, 4.45423986754, 17256.6315363414],
    [0.00000000082, 0.70225541331, 9808.5381846614],
    [0.00000000075, 1.88840044542, 15643.6802033098],
    [0.00000000071, 4.47046372301, 10177.2576795336],
    [0.0000000007, 3.37789486799, 13517.8701062334],
    [0.00000000075, 2.27088357802, 12566.1516999828],
    [0.00000000066, 0.13337760475, 15110.4661198662],
    [0.0000000008, 1.32412177054, 21393.5419698576],
    [0.00000000076, 3.32363330267, 13916.0191096416],
    [0.00000000067, 4.66693287754, 5828.0284716476],
    [0.00000000063, 6.16425576512, 3914.9572250346],
    [0.00000000073, 3.44104044998, 692.1576012268],
    [0.00000000064, 5.11183842129, 3191.0492295652],
    [0.00000000076, 4.86164511219, 20597.2439630412],
    [0.00000000061, 1.44371703655, 11081.2192102886],
    [0.0000000006, 1.62689158397, 3335.0895023924],
    [0.00000000075, 4.78215371632, 12964.300703391],
    [0.00000000061, 3.35711733735, 20995.3929664494],
    [0.00000000053, 6.24589101777, 20199.094959633],
    [0.00000000055, 0.28321587193, 5459.3762870782],
    [0.00000000052, 4.94957858677, 24734.1543965574],
    [0.00000000051, 3.29132317156, 15113.9892382152],
    [0.00000000068, 3.59488057957, 103.0927742186],
    [0.00000000057, 2.70607036374, 10713.9948813262],
    [0.0000000006, 3.00951950244, 3344.4937620578],
    [0.00000000065, 2.78876221132, 3981.490034082],
    [0.00000000049, 3.13153581502, 2766.267628365],
    [0.00000000049, 2.33304379441, 6660.4494579072],
    [0.0000000006, 4.17222973491, 4407.1079038898],
    [0.00000000049, 0.1030163494, 13358.9265884502],
    [0.00000000046, 0.97092241478, 8270.2977486834],
    [0.00000000061, 1.61644555817, 14314.1681130498],
    [0.00000000057, 4.04165606796, 1648.4467571974],
    [0.0000000006, 0.05239748726, 8273.8208670324],
    [0.00000000044, 5.68073325802, 3329.97576135],
    [0.00000000044, 0.43949269085, 3351.2490920496],
    [0.00000000043, 4.87531812567, 10021.7699697966],
    [0.00000000048, 1.42334455474, 76.2660712756],
    [0.00000000045, 4.07917825234, 1692.1656695024],
    [0.00000000046, 3.33348460172, 3369.0616141676],
    [0.00000000045, 5.89893308094, 2818.035008606],
    [0.00000000046, 1.6949722034, 10404.7338123226],
    [0.00000000041, 5.80219476378, 6702.000248892],
    [0.0000000004, 5.47626814223, 3074.005384978],
    [0.00000000044, 5.36428737888, 2707.8286873866],
    [0.00000000037, 0.64022063667, 3607.2194684216],
    [0.00000000043, 4.47402411722, 10021.9045904022],
    [0.00000000034, 3.20375305228, 5099.2655051166],
    [0.00000000034, 5.74767895336, 6531.661656265],
    [0.00000000032, 4.71476653314, 16173.3711684044],
    [0.00000000035, 4.78248662801, 10551.528245194],
    [0.00000000031, 2.45682708815, 10973.55568635],
    [0.00000000036, 2.89209321078, 3333.5661900018],
    [0.00000000031, 3.61192484167, 6684.8152820514],
    [0.00000000041, 4.63075392785, 8031.0922630584],
    [0.00000000032, 3.037614911, 12935.8515159232],
    [0.00000000038, 0.87141658782, 3973.396166013],
    [0.0000000004, 3.8910436604, 74.7815985673],
    [0.00000000028, 3.07347183013, 3281.2385647862],
];

const Z2: &[Term] = &[
    [0.00025937973, 0.59444055009, 3340.6124266998],
    [0.00011396105, PI, 0.0],
    [0.00000237211, 5.64509583638, 6681.2248533996],
    [0.0000001812, 2.24234887624, 3337.0893083508],
    [0.00000011005, 0.65490267432, 10021.8372800994],
    [0.00000009574, 1.87721957302, 13362.4497067992],
    [0.00000004373, 5.89380048765, 3496.032826134],
    [0.00000002387, 1.18064647446, 2281.2304965106],
    [0.00000002425, 2.245214035, 16703.062133499],
    [0.00000002528, 5.16130960942, 5621.8429232104],
    [0.00000001966, 1.32977724844, 529.6909650946],
    [0.00000002006, 4.80335600212, 3185.1920272656],
    [0.00000002202, 3.18250102468, 3532.0606928114],
    [0.00000001723, 3.39265057715, 2544.3144198834],
    [0.0000000205, 1.83403249506, 2942.4634232916],
    [0.00000001453, 0.37005682859, 3344.1355450488],
    [0.00000001154, 4.29461877948, 3340.5951730476],
    [0.00000000942, 5.17754009029, 5486.777843175],
    [0.00000001154, 0.04220516563, 3340.629680352],
    [0.00000001059, 3.80803028238, 5884.9268465832],
    [0.00000000802, 4.47943934542, 3894.1818295422],
    [0.0000000079, 2.35155821746, 6677.7017350506],
    [0.00000000825, 4.68895461946, 3339.6321056316],
    [0.00000000712, 0.32050354263, 5088.6288397668],
    [0.00000000708, 3.1046526469, 6151.533888305],
    [0.00000000753, 1.05772254525, 3097.88382272579],
    [0.00000000681, 5.28693721347, 2810.9214616052],
    [0.00000000576, 2.00619713133, 398.1490034082],
    [0.00000000534, 4.77461983159, 2146.1654164752],
    [0.00000000558, 4.73319922901, 5092.1519581158],
    [0.00000000532, 3.07796101643, 4292.3308329504],
    [0.00000000431, 5.63787706168, 3723.508958923],
    [0.00000000486, 1.71152918305, 4690.4798363586],
    [0.00000000395, 5.46836844513, 8962.4553499102],
    [0.0000000038, 2.37265090321, 3340.545116397],
    [0.00000000379, 2.21710594361, 6283.0758499914],
    [0.0000000038, 1.96415613563, 3340.6797370026],
    [0.00000000455, 2.58588447058, 20043.6745601988],
    [0.0000000034, 6.21625640724, 2787.0430238574],
    [0.00000000347, 3.5446281535, 3583.3410306738],
    [0.00000000287, 4.23196046901, 3333.498879699],
    [0.00000000233, 5.0539823676, 155.4203994342],
    [0.0000000023, 1.34020611446, 3127.3133312618],
    [0.00000000236, 2.5625587597, 6684.7479717486],
    [0.0000000026, 6.15858109011, 1748.016413067],
    [0.00000000206, 3.72535272141, 1059.3819301892],
    [0.00000000248, 5.15522357344, 6525.8044539654],
    [0.00000000192, 0.80270977901, 2288.3440435114],
    [0.00000000204, 4.67148878659, 6254.6266625236],
    [0.0000000024, 1.10355321364, 2388.8940204492],
    [0.00000000178, 2.70046492113, 1990.745017041],
    [0.00000000151, 4.03002963282, 1592.5960136328],
    [0.00000000171, 1.51083272272, 1751.539531416],
    [0.00000000178, 5.84283595443, 2914.0142358238],
    [0.00000000136, 5.31523052413, 3738.761430108],
    [0.00000000136, 1.17176449808, 1349.8674096588],
    [0.00000000118, 1.93283002344, 6674.1113063988],
    [0.00000000114, 5.86339475096, 3341.592747768],
    [0.00000000136, 1.411611754, 6438.4962494256],
    [0.00000000109, 5.09540016416, 2957.7158944766],
    [0.00000000114, 2.8754071899, 242.728603974],
    [0.00000000122, 4.72332419375, 2274.1169495098],
    [0.00000000116, 5.94036127941, 6836.6452528338],
    [0.00000000101, 2.47526676901, 951.7184062506],
    [0.00000000091, 2.24799296656, 7.1135470008],
    [0.00000000101, 3.67031931828, 553.5694028424],
    [0.00000000085, 4.86490039033, 796.2980068164],
    [0.00000000083, 4.64956502978, 4562.4609930212],
    [0.00000000095, 3.01019726572, 10025.3603984484],
    [0.00000000082, 2.247849706, 213.299095438],
    [0.00000000072, 2.91435793605, 23384.2869868986],
    [0.0000000007, 5.5564205505, 1066.49547719],
    [0.00000000063, 2.72606022638, 8955.3418029094],
    [0.00000000058, 4.22927578363, 7210.9158184942],
    [0.0000000006, 5.55658292278, 6041.3275670856],
    [0.00000000071, 3.27534690079, 1589.0728952838],
    [0.00000000056, 3.44816851943, 3325.3599555148],
    [0.00000000063, 3.79468594256, 3870.3033917944],
    [0.00000000057, 4.55390406368, 4933.2084403326],
    [0.00000000049, 4.29985057106, 3355.8648978848],
    [0.00000000048, 1.97226084372, 10018.3141617504],
    [0.00000000047, 5.89481794819, 4535.0594369244],
    [0.00000000053, 6.14813219827, 3360.96774609859],
    [0.00000000045, 3.79109648033, 6923.9534573736],
    [0.00000000053, 1.49899662719, 3320.257107301],
    [0.00000000047, 0.28071441637, 6127.6554505572],
    [0.00000000049, 0.19353472631, 3347.7259737006],
    [0.00000000058, 5.89204904964, 1052.2683831884],
    [0.00000000045, 4.60130468759, 4399.994356889],
    [0.00000000038, 3.96782009416, 426.598190876],
    [0.0000000004, 1.57658451682, 6489.776587288],
    [0.00000000037, 1.62198165732, 5729.506447149],
    [0.00000000041, 1.99669605118, 2699.7348193176],
    [0.00000000048, 2.84634781523, 3149.1641605882],
    [0.00000000036, 5.09960798057, 8432.7643848156],
    [0.00000000037, 0.36652988837, 6681.2921637024],
    [0.00000000039, 5.13641267319, 8969.568896911],
    [0.00000000034, 4.67496434823, 1194.4470102246],
    [0.00000000043, 3.02127238214, 5331.3574437408],
    [0.00000000037, 1.53879532057, 191.4482661116],
    [0.00000000039, 2.54138775081, 2118.7638603784],
    [0.00000000032, 1.49561091356, 10419.9862835076],
    [0.00000000029, 1.5983584385, 7477.522860216],
    [0.00000000031, 0.15682384975, 3205.5473466644],
    [0.00000000029, 0.99282533197, 522.5774180938],
    [0.00000000028, 4.76871968197, 382.8965322232],
    [0.00000000028, 4.49319887552, 9866.4168806652],
    [0.00000000029, 5.20891382825, 4136.9104335162],
    [0.00000000033, 2.19423390657, 6467.9257579616],
    [0.00000000028, 6.20715072868, 6682.2051744678],
    [0.00000000023, 0.54135050421, 640.8776073822],
    [0.00000000026, 2.0153652659, 9492.1463150048],
    [0.00000000024, 5.95184917338, 3361.3878221922],
    [0.00000000022, 3.34551257447, 13365.9728251482],
    [0.00000000024, 1.4308276236, 5614.7293762096],
    [0.00000000022, 5.01088515186, 10021.8545337516],
    [0.00000000023, 0.3960491946, 536.8045120954],
    [0.0000000002, 4.75287585505, 3553.9115221378],
    [0.00000000021, 6.15131706326, 7875.6718636242],
    [0.00000000019, 3.85960262286, 3319.8370312074],
    [0.00000000022, 2.98009613873, 10021.8200264472],
    [0.00000000021, 5.09018656324, 6681.2421070518],
    [0.00000000019, 5.37557953087, 9623.6882766912],
    [0.00000000021, 3.05785674731, 6681.2075997474],
    [0.00000000017, 5.33111011611, 6681.1575430968],
    [0.00000000016, 0.88926952692, 5628.9564702112],
    [0.00000000019, 4.38572360867, 6680.2445323314],
    [0.00000000015, 3.04079800434, 3178.1457905676],
    [0.00000000018, 5.87932589084, 7740.6067835888],
    [0.00000000014, 4.19183102447, 12303.06777661],
    [0.00000000014, 3.08467357092, 3503.079062832],
    [0.00000000014, 4.0205443973, 3316.733988952],
    [0.00000000014, 2.10530552076, 3364.4908644476],
];

const Z3: &[Term] = &[
    [0.00000897035, 1.98437168368, 3340.6124266998],
    [0.00000097387, 0.0, 0.0],
    [0.00000008489, 1.73419562297, 6681.2248533996],
    [0.00000001419, 3.74979881372, 3337.0893083508],
    [0.00000000928, 3.63625528948, 10021.8372800994],
    [0.00000000926, 1.14567082339, 3496.032826134],
    [0.00000000286, 0.11838177607, 13362.4497067992],
    [0.00000000276, 3.29100886638, 3185.1920272656],
    [0.0000000019, 2.55743259713, 3097.88382272579],
    [0.00000000179, 4.90901018351, 2544.3144198834],
    [0.00000000186, 4.7441905706, 3532.0606928114],
    [0.00000000149, 0.69534389042, 16703.062133499],
    [0.00000000133, 6.04294120509, 3894.1818295422],
    [0.00000000165, 0.3164600271, 5621.8429232104],
    [0.00000000176, 3.40942833158, 2942.4634232916],
    [0.00000000094, 6.257389499, 3339.6321056316],
    [0.00000000083, 2.80242797318, 529.6909650946],
    [0.00000000079, 4.65398630855, 4292.3308329504],
    [0.00000000073, 0.02372395336, 2146.1654164752],
    [0.00000000069, 1.90616132633, 3583.3410306738],
    [0.00000000059, 1.90076914463, 5088.6288397668],
    [0.00000000057, 0.91841960965, 3723.508958923],
    [0.00000000066, 3.26000189494, 4690.4798363586],
    [0.00000000049, 6.24342258336, 2281.2304965106],
    [0.0000000004, 0.33925158823, 5486.777843175],
    [0.00000000038, 0.33382735668, 155.4203994342],
    [0.00000000037, 5.38905349684, 3340.5951730476],
    [0.00000000043, 3.67789144879, 6525.8044539654],
    [0.00000000037, 1.13663982116, 3340.629680352],
    [0.00000000034, 0.54674814571, 1059.3819301892],
    [0.00000000033, 3.70799920482, 6677.7017350506],
    [0.00000000042, 1.06901082266, 20043.6745601988],
    [0.0000000004, 5.1884574455, 5884.9268465832],
    [0.00000000028, 5.53170427847, 3333.498879699],
    [0.00000000027, 4.74965318878, 2787.0430238574],
    [0.00000000032, 2.9476550159, 398.1490034082],
    [0.00000000026, 0.80891817293, 1194.4470102246],
    [0.0000000002, 5.71161307356, 5092.1519581158],
    [0.00000000014, 0.59214435004, 4399.994356889],
    [0.00000000012, 0.57596701083, 1748.016413067],
    [0.00000000015, 5.61526640204, 7079.3738568078],
    [0.00000000014, 4.18010272073, 6151.533888305],
    [0.00000000012, 5.88319051616, 1592.5960136328],
    [0.00000000012, 3.7471978933, 242.728603974],
    [0.00000000011, 3.77687231272, 2274.1169495098],
    [0.00000000011, 3.28827114872, 3738.761430108],
    [0.00000000011, 6.10972583214, 23384.2869868986],
    [0.0000000001, 6.20023805343, 2288.3440435114],
    [0.00000000011, 1.61096472294, 3344.1355450488],
    [0.00000000009, 2.89522242682, 553.5694028424],
    [0.00000000011, 4.21212605505, 6489.776587288],
    [0.00000000008, 2.95652295638, 3127.3133312618],
    [0.00000000007, 0.49773686048, 6684.7479717486],
    [0.00000000007, 5.43009944036, 4933.2084403326],
    [0.00000000007, 2.19921948725, 6438.4962494256],
    [0.00000000009, 3.04008808528, 7.1135470008],
];

const Z4: &[Term] = &[
    [0.00000030554, 0.0, 0.0],
    [0.00000019442, 3.44959674542, 3340.6124266998],
    [0.00000000371, 0.36613555151, 6681.2248533996],
    [0.00000000155, 2.66185835593, 3496.032826134],
    [0.00000000081, 5.27888218929, 3337.0893083508],
    [0.00000000073, 1.31158212762, 10021.8372800994],
    [0.00000000034, 4.09971603267, 3097.88382272579],
    [0.00000000033, 1.76655964001, 3185.1920272656],
    [0.00000000015, 0.959895956, 3894.1818295422],
    [0.00000000009, 0.31833513882, 3583.3410306738],
    [0.00000000006, 3.76221637426, 6684.7479717486],
    [0.00000000006, 1.44439054717, 2787.0430238574],
    [0.00000000008, 1.39569739639, 3344.1355450488],
    [0.00000000006, 5.83516395431, 3532.0606928114],
    [0.00000000006, 5.97538779583, 2544.3144198834],
    [0.00000000005, 5.41788972302, 16703.062133499],
    [0.00000000006, 1.96708787649, 6525.8044539654],
    [0.00000000004, 5.61196522691, 4292.3308329504],
    [0.00000000004, 4.54689889636, 2942.4634232916],
    [0.00000000005, 2.79859082923, 13362.4497067992],
];

pub static MARS: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
